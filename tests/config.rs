//! CONF register codec tests.

use as5600_async::{
    CONF_FTH_MASK, CONF_SF_MASK, ConfigField, ConfigFields, ConfigWord, InvalidFieldValue,
    LOW_LATENCY_CONFIG,
};

#[test]
fn low_latency_preset_matches_register_value() {
    let fields = ConfigFields {
        slow_filter: 3,
        fast_filter_threshold: 1,
        ..ConfigFields::default()
    };
    assert_eq!(fields.encode().unwrap().bits(), 0x0700);
    assert_eq!(LOW_LATENCY_CONFIG.bits(), 0x0700);
    assert_eq!(LOW_LATENCY_CONFIG.decode(), ConfigFields::LOW_LATENCY);
}

#[test]
fn fields_land_at_their_offsets() {
    let cases = [
        (ConfigField::Watchdog, 1, 0x2000),
        (ConfigField::FastFilterThreshold, 7, 0x1C00),
        (ConfigField::SlowFilter, 3, 0x0300),
        (ConfigField::PwmFrequency, 3, 0x00C0),
        (ConfigField::OutputStage, 3, 0x0030),
        (ConfigField::Hysteresis, 3, 0x000C),
        (ConfigField::PowerMode, 3, 0x0003),
    ];
    for (field, value, bits) in cases {
        let word = ConfigWord::default().with_field(field, value).unwrap();
        assert_eq!(word.bits(), bits, "{field:?}");
        assert_eq!(field.mask(), bits);
    }
    assert_eq!(CONF_SF_MASK, 0x0300);
    assert_eq!(CONF_FTH_MASK, 0x1C00);
}

#[test]
fn decode_inverts_encode() {
    let fields = ConfigFields {
        watchdog: 1,
        fast_filter_threshold: 5,
        slow_filter: 2,
        pwm_frequency: 1,
        output_stage: 2,
        hysteresis: 3,
        power_mode: 1,
    };
    let word = fields.encode().unwrap();
    assert_eq!(word.bits(), 0b0011_0110_0110_1101);
    assert_eq!(word.decode(), fields);
}

#[test]
fn every_value_of_every_field_round_trips() {
    for field in ConfigField::ALL {
        for value in 0..=field.max_value() {
            let mut fields = ConfigFields::LOW_LATENCY;
            match field {
                ConfigField::Watchdog => fields.watchdog = value,
                ConfigField::FastFilterThreshold => fields.fast_filter_threshold = value,
                ConfigField::SlowFilter => fields.slow_filter = value,
                ConfigField::PwmFrequency => fields.pwm_frequency = value,
                ConfigField::OutputStage => fields.output_stage = value,
                ConfigField::Hysteresis => fields.hysteresis = value,
                ConfigField::PowerMode => fields.power_mode = value,
            }
            let word = fields.encode().unwrap();
            assert_eq!(word.decode(), fields);
            assert_eq!(word.field(field), value);
        }
    }
}

#[test]
fn rejects_values_wider_than_field() {
    let fields = ConfigFields {
        slow_filter: 4,
        ..ConfigFields::default()
    };
    assert_eq!(
        fields.encode(),
        Err(InvalidFieldValue {
            field: ConfigField::SlowFilter,
            value: 4,
        })
    );

    let fields = ConfigFields {
        watchdog: 2,
        fast_filter_threshold: 8,
        ..ConfigFields::default()
    };
    assert_eq!(
        fields.encode().unwrap_err().field,
        ConfigField::Watchdog,
        "first offending field in register order"
    );

    assert!(
        ConfigWord::default()
            .with_field(ConfigField::FastFilterThreshold, 8)
            .is_err()
    );
}

#[test]
fn decode_ignores_reserved_bits() {
    let word = ConfigWord::from_bits(0xC700);
    assert_eq!(word.bits(), 0x0700);
    assert_eq!(word.decode(), ConfigFields::LOW_LATENCY);
    assert_eq!(ConfigWord::from_bits(0xFFFF).decode().encode().unwrap().bits(), 0x3FFF);
}

#[test]
fn with_field_keeps_other_fields() {
    let word = ConfigWord::from_bits(0x3FFF)
        .with_field(ConfigField::SlowFilter, 0)
        .unwrap();
    assert_eq!(word.bits(), 0x3CFF);
}
