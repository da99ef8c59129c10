use crate::core::{Insets, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_chart_config(config: ChartConfig) -> ChartResult<ChartConfig> {
    if !config.min_label_width.is_finite() || config.min_label_width <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "min_label_width must be finite and > 0".to_owned(),
        ));
    }

    validate_insets(config.insets)?;

    for (name, radius) in [
        ("dot_outer_radius", config.dot_outer_radius),
        ("dot_inner_radius", config.dot_inner_radius),
    ] {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    if config.dot_inner_radius > config.dot_outer_radius {
        return Err(ChartError::InvalidConfig(
            "dot_inner_radius must be <= dot_outer_radius".to_owned(),
        ));
    }

    Ok(config)
}

fn validate_insets(insets: Insets) -> ChartResult<()> {
    for (side, value) in [
        ("left", insets.left),
        ("top", insets.top),
        ("bottom", insets.bottom),
        ("right", insets.right),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{side} inset must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_chart_config;
    use crate::api::ChartConfig;
    use crate::core::Insets;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_chart_config(ChartConfig::default()).is_ok());
    }

    #[test]
    fn negative_inset_is_rejected() {
        let config = ChartConfig::default().with_insets(Insets::new(-1.0, 0.0, 0.0, 0.0));
        assert!(validate_chart_config(config).is_err());
    }

    #[test]
    fn inner_dot_larger_than_outer_is_rejected() {
        let config = ChartConfig::default().with_dots(true, 4.0, 6.0);
        assert!(validate_chart_config(config).is_err());
    }
}
