//! Field-name derivation and capitalization-collision detection

use serde_json::{Map, Value};

/// Derive the exported Go field name from a JSON key: the first character is
/// uppercased, the remainder is left untouched. No further sanitization is
/// applied — keys starting with digits, keys that are not valid identifiers,
/// and duplicates after capitalization all pass through unchanged.
pub fn exported_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Two distinct JSON keys that capitalize to the same exported field name
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// Dotted key path of the object containing the colliding keys; empty at
    /// the document root
    pub path: String,
    /// The shared exported field name
    pub field_name: String,
    /// The original keys, in insertion order
    pub keys: Vec<String>,
}

impl Collision {
    /// Human-readable description for diagnostics
    pub fn describe(&self) -> String {
        let location = if self.path.is_empty() {
            "top-level object".to_string()
        } else {
            format!("object at '{}'", self.path)
        };
        format!(
            "keys {} in {} all map to field '{}'",
            self.keys
                .iter()
                .map(|k| format!("\"{}\"", k))
                .collect::<Vec<_>>()
                .join(", "),
            location,
            self.field_name
        )
    }
}

/// Find every capitalization collision in the object tree. Detection only:
/// the generated declaration is left untouched and will contain duplicate
/// field names.
pub fn find_collisions(object: &Map<String, Value>) -> Vec<Collision> {
    let mut collisions = Vec::new();
    collect_collisions(object, String::new(), &mut collisions);
    collisions
}

fn collect_collisions(object: &Map<String, Value>, path: String, out: &mut Vec<Collision>) {
    // Insertion-order grouping so reports are deterministic
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for key in object.keys() {
        let name = exported_name(key);
        match groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, keys)) => keys.push(key.clone()),
            None => groups.push((name, vec![key.clone()])),
        }
    }

    for (field_name, keys) in groups {
        if keys.len() > 1 {
            out.push(Collision {
                path: path.clone(),
                field_name,
                keys,
            });
        }
    }

    for (key, value) in object {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path, key)
        };
        match value {
            Value::Object(map) => collect_collisions(map, child_path, out),
            Value::Array(items) => {
                // Array element types come from element 0 only
                if let Some(Value::Object(map)) = items.first() {
                    collect_collisions(map, format!("{}[0]", child_path), out);
                }
            }
            _ => {}
        }
    }
}
