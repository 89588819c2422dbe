/// Parameters of a mesh volume computation.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeConfig {
    /// Height of the horizontal reference plane the volume is measured from.
    pub reference_elevation: f64,
    /// Label printed before the progress bar.
    pub progress_prefix: String,
    /// Label printed after the progress bar.
    pub progress_suffix: String,
    /// Width of the progress bar in characters.
    pub progress_length: usize,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            reference_elevation: 0.0,
            progress_prefix: "Progress:".to_string(),
            progress_suffix: "Complete".to_string(),
            progress_length: 50,
        }
    }
}

impl VolumeConfig {
    pub fn with_reference_elevation(mut self, reference_elevation: f64) -> Self {
        self.reference_elevation = reference_elevation;
        self
    }

    pub fn with_progress_length(mut self, progress_length: usize) -> Self {
        self.progress_length = progress_length;
        self
    }
}
