use thiserror::Error;

use super::rule::Axis;

#[derive(Debug, Error, PartialEq)]
pub enum ParallaxError {
    #[error("no camera tagged with ParallaxCamera, parallax setup aborted")]
    NoCamera,
    #[error("{0} cameras tagged with ParallaxCamera (expected one), parallax setup aborted")]
    MultipleCameras(usize),
    #[error("parallax layer '{layer}' has no target entity, layer skipped")]
    MissingTarget { layer: String },
    #[error("parallax layer '{layer}' requests infinite scroll but has no sprite, wrap disabled")]
    MissingFootprint { layer: String },
    #[error("parallax layer '{layer}' has degenerate {axis} span {span}, wrap disabled on {axis}")]
    DegenerateSpan { layer: String, axis: Axis, span: f32 },
}

impl ParallaxError {
    /// Environment errors abort activation entirely; everything else only
    /// affects the layer it names.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParallaxError::NoCamera | ParallaxError::MultipleCameras(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_errors_are_fatal() {
        assert!(ParallaxError::NoCamera.is_fatal());
        assert!(ParallaxError::MultipleCameras(2).is_fatal());
        assert!(
            !ParallaxError::MissingTarget {
                layer: "sky".into()
            }
            .is_fatal()
        );
    }

    #[test]
    fn degenerate_span_message_names_axis() {
        let err = ParallaxError::DegenerateSpan {
            layer: "hills".into(),
            axis: Axis::Y,
            span: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "parallax layer 'hills' has degenerate y span 0, wrap disabled on y"
        );
    }
}
