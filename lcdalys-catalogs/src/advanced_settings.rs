//! Built-in advanced settings: the model assumptions a user may adjust.

use lcdalys_core::settings::{
    AdvancedSetting, ANNUAL_INFECTION_RATE, DALY_WEIGHT_LESS_SEVERE, DALY_WEIGHT_MODERATE,
    FAR_UVC_EFFECTIVENESS_MULTIPLIER, HEPA_EFFECTIVENESS_MULTIPLIER,
    INDOOR_AIR_TRANSMISSION_PERCENT, LONG_COVID_CONVERSION_RATE,
};
use lcdalys_core::timeseries::FloatValue;

#[allow(clippy::too_many_arguments)]
fn setting(
    key: &str,
    label: &str,
    description: &str,
    min: FloatValue,
    max: FloatValue,
    step: FloatValue,
    default_value: FloatValue,
    unit: Option<&str>,
) -> AdvancedSetting {
    AdvancedSetting {
        key: key.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        min,
        max,
        step,
        default_value,
        unit: unit.map(str::to_string),
    }
}

pub fn advanced_settings() -> Vec<AdvancedSetting> {
    vec![
        setting(
            ANNUAL_INFECTION_RATE,
            "Annual infection rate",
            "Percentage of the population infected with SARS-CoV-2 each year",
            10.0,
            50.0,
            1.0,
            29.0,
            Some("%"),
        ),
        setting(
            LONG_COVID_CONVERSION_RATE,
            "Long COVID conversion rate",
            "Fraction of COVID-19 infections that convert into syndromic Long COVID",
            5.0,
            50.0,
            0.5,
            10.0,
            Some("%"),
        ),
        setting(
            DALY_WEIGHT_LESS_SEVERE,
            "DALY weight (less severe Long COVID)",
            "DALYs lost per year for people with less severe Long COVID",
            0.05,
            0.5,
            0.05,
            0.1,
            Some("DALYs/year"),
        ),
        setting(
            DALY_WEIGHT_MODERATE,
            "DALY weight (moderate Long COVID)",
            "DALYs lost per year for people with moderately severe Long COVID",
            0.2,
            1.0,
            0.1,
            0.4,
            Some("DALYs/year"),
        ),
        setting(
            INDOOR_AIR_TRANSMISSION_PERCENT,
            "Infections via indoor air transmission",
            "Percentage of COVID-19 infections that occur via extended exposure to circulated \
             indoor air (vs. close, brief contact)",
            0.0,
            100.0,
            5.0,
            60.0,
            Some("%"),
        ),
        setting(
            HEPA_EFFECTIVENESS_MULTIPLIER,
            "HEPA effectiveness multiplier",
            "Multiplier to adjust HEPA filter effectiveness (1.0 = base effectiveness from research)",
            0.5,
            1.5,
            0.1,
            1.0,
            None,
        ),
        setting(
            FAR_UVC_EFFECTIVENESS_MULTIPLIER,
            "Far UVC effectiveness multiplier",
            "Multiplier to adjust Far UVC effectiveness (1.0 = base effectiveness from research)",
            0.5,
            1.5,
            0.1,
            1.0,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use lcdalys_core::settings::AdvancedSettingsRegistry;

    #[test]
    fn registry_is_valid() {
        let registry = AdvancedSettingsRegistry::new(advanced_settings()).unwrap();
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn default_average_daly_weight() {
        let registry = AdvancedSettingsRegistry::new(advanced_settings()).unwrap();
        let weight = registry.defaults().average_daly_weight(&registry).unwrap();
        assert!(is_close!(weight, 0.19));
    }

    #[test]
    fn multipliers_are_unitless() {
        let registry = AdvancedSettingsRegistry::new(advanced_settings()).unwrap();
        for key in [HEPA_EFFECTIVENESS_MULTIPLIER, FAR_UVC_EFFECTIVENESS_MULTIPLIER] {
            let setting = registry.get(key).unwrap();
            assert_eq!(setting.unit, None);
            assert_eq!(setting.default_value, 1.0);
        }
    }
}
