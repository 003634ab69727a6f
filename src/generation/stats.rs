//! Statistics and performance tracking for generation operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Performance statistics for generation operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStatistics {
    /// Input JSON size in bytes
    pub input_size_bytes: u64,
    /// Output declaration size in bytes
    pub output_size_bytes: u64,
    /// Total field lines emitted
    pub field_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Number of generation operations
    pub operation_count: usize,
    /// Average time per operation
    pub avg_time_per_operation_ms: f32,
    /// Throughput (bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Capitalization collisions reported across all operations
    pub collision_count: usize,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for GenerationStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            field_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            operation_count: 0,
            avg_time_per_operation_ms: 0.0,
            throughput_bytes_per_sec: 0.0,
            collision_count: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl GenerationStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single generation
    pub fn for_generation(
        input_size: u64,
        output_size: u64,
        field_count: usize,
        collision_count: usize,
        processing_time: Duration,
    ) -> Self {
        let processing_time_ms = processing_time.as_millis() as u64;
        let throughput_bytes_per_sec = if processing_time.as_secs_f64() > 0.0 {
            input_size as f64 / processing_time.as_secs_f64()
        } else {
            0.0
        } as f32;

        Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            field_count,
            processing_time_ms,
            file_count: 1,
            operation_count: 1,
            avg_time_per_operation_ms: processing_time_ms as f32,
            throughput_bytes_per_sec,
            collision_count,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Merge statistics from another run into this one
    pub fn merge(&mut self, other: &GenerationStatistics) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.field_count += other.field_count;
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;
        self.operation_count += other.operation_count;
        self.collision_count += other.collision_count;

        self.avg_time_per_operation_ms = if self.operation_count > 0 {
            self.processing_time_ms as f32 / self.operation_count as f32
        } else {
            0.0
        };

        let total_secs = self.processing_time_ms as f64 / 1000.0;
        self.throughput_bytes_per_sec = if total_secs > 0.0 {
            (self.input_size_bytes as f64 / total_secs) as f32
        } else {
            0.0
        };

        self.collected_at = chrono::Utc::now();
    }

    /// Render a human-readable report
    pub fn report(&self) -> String {
        let mut out = String::from("Generation Statistics:\n");
        out.push_str(&format!("Input size: {} bytes\n", self.input_size_bytes));
        out.push_str(&format!("Output size: {} bytes\n", self.output_size_bytes));
        out.push_str(&format!("Fields emitted: {}\n", self.field_count));
        out.push_str(&format!("Files processed: {}\n", self.file_count));
        out.push_str(&format!(
            "Processing time: {}ms ({:.1}ms/op)\n",
            self.processing_time_ms, self.avg_time_per_operation_ms
        ));
        if self.collision_count > 0 {
            out.push_str(&format!(
                "Field-name collisions: {}\n",
                self.collision_count
            ));
        }
        out
    }
}
