/// Errors returned by the strict parsing functions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The input is not written in any of the supported syntaxes.
    #[error("color {input:?} does not match any supported notation")]
    Unrecognized {
        /// The rejected input.
        input: String,
    },

    /// The syntax was recognized, but one of the channels has no numeric
    /// value.
    #[error("color {input:?} has no valid value for the {channel} channel")]
    MissingChannel {
        /// The rejected input.
        input: String,
        /// Name of the first channel that failed.
        channel: &'static str,
    },

    /// The name of a notation is not one of `rgb`, `hsl` or `hwb`.
    #[error("unknown color notation {tag:?}")]
    UnknownNotation {
        /// The rejected notation name.
        tag: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ParseColorError::Unrecognized {
            input: "notacolor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "color \"notacolor\" does not match any supported notation"
        );

        let err = ParseColorError::MissingChannel {
            input: "rgb(1)".to_string(),
            channel: "green",
        };
        assert_eq!(
            err.to_string(),
            "color \"rgb(1)\" has no valid value for the green channel"
        );
    }
}
