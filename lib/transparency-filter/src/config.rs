use derivative::Derivative;
use derive_setters::Setters;

pub const DEFAULT_INPUT: &str = "assets/empty_characters_transparent.png";
pub const DEFAULT_OUTPUT: &str = "assets/empty_characters_transparent_fixed.png";

/// Source and destination of a transparency pass
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct TransparencyConfig {
    /// Image to read, any format the codec can decode
    #[derivative(Default(value = "DEFAULT_INPUT.to_string()"))]
    pub input: String,

    /// PNG file to write, its parent directory must exist
    #[derivative(Default(value = "DEFAULT_OUTPUT.to_string()"))]
    pub output: String,
}

impl TransparencyConfig {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self::default()
            .with_input(input.into())
            .with_output(output.into())
    }
}
