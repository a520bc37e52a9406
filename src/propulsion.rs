use crate::constants::*;
use crate::errors::InputError;

/// Bounds for one calculator input, mirrored onto the `<input type="range">`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        InputRange { min, max, step }
    }

    /// Clamps a finite value into the range. Non-finite values are rejected.
    pub fn clamp(&self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite(value));
        }
        Ok(value.clamp(self.min, self.max))
    }

    pub fn parse(&self, raw: &str) -> Result<f64, InputError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber(raw.to_string()))?;
        self.clamp(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorInput {
    MassFlow,
    ExhaustVelocity,
    AmbientPressure,
    ExitPressure,
    ExitArea,
}

impl CalculatorInput {
    pub const ALL: [CalculatorInput; 5] = [
        CalculatorInput::MassFlow,
        CalculatorInput::ExhaustVelocity,
        CalculatorInput::AmbientPressure,
        CalculatorInput::ExitPressure,
        CalculatorInput::ExitArea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CalculatorInput::MassFlow => "Mass flow",
            CalculatorInput::ExhaustVelocity => "Exhaust velocity",
            CalculatorInput::AmbientPressure => "Ambient pressure",
            CalculatorInput::ExitPressure => "Exit pressure",
            CalculatorInput::ExitArea => "Exit area",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            CalculatorInput::MassFlow => "kg/s",
            CalculatorInput::ExhaustVelocity => "m/s",
            CalculatorInput::AmbientPressure | CalculatorInput::ExitPressure => "Pa",
            CalculatorInput::ExitArea => "m\u{b2}",
        }
    }

    pub fn range(&self) -> InputRange {
        match self {
            CalculatorInput::MassFlow => InputRange::new(50.0, 800.0, 1.0),
            CalculatorInput::ExhaustVelocity => InputRange::new(1500.0, 4500.0, 10.0),
            CalculatorInput::AmbientPressure => InputRange::new(0.0, 101_325.0, 500.0),
            CalculatorInput::ExitPressure => InputRange::new(0.0, 101_325.0, 500.0),
            CalculatorInput::ExitArea => InputRange::new(0.2, 2.0, 0.01),
        }
    }
}

/// The five calculator inputs. Fields are private so every value that
/// reaches the formulas has gone through its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorState {
    mass_flow: f64,
    exhaust_velocity: f64,
    ambient_pressure: f64,
    exit_pressure: f64,
    exit_area: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            mass_flow: 250.0,
            exhaust_velocity: 3300.0,
            ambient_pressure: 101_325.0,
            exit_pressure: 90_000.0,
            exit_area: 0.6,
        }
    }
}

impl CalculatorState {
    /// Builds a state from raw values, clamping each into its range.
    pub fn new(
        mass_flow: f64,
        exhaust_velocity: f64,
        ambient_pressure: f64,
        exit_pressure: f64,
        exit_area: f64,
    ) -> Result<Self, InputError> {
        let mut state = CalculatorState::default();
        state.set(CalculatorInput::MassFlow, mass_flow)?;
        state.set(CalculatorInput::ExhaustVelocity, exhaust_velocity)?;
        state.set(CalculatorInput::AmbientPressure, ambient_pressure)?;
        state.set(CalculatorInput::ExitPressure, exit_pressure)?;
        state.set(CalculatorInput::ExitArea, exit_area)?;
        Ok(state)
    }

    pub fn get(&self, input: CalculatorInput) -> f64 {
        match input {
            CalculatorInput::MassFlow => self.mass_flow,
            CalculatorInput::ExhaustVelocity => self.exhaust_velocity,
            CalculatorInput::AmbientPressure => self.ambient_pressure,
            CalculatorInput::ExitPressure => self.exit_pressure,
            CalculatorInput::ExitArea => self.exit_area,
        }
    }

    /// Sets one input and returns the value actually stored. On error the
    /// previous value is kept.
    pub fn set(&mut self, input: CalculatorInput, value: f64) -> Result<f64, InputError> {
        let value = input.range().clamp(value)?;
        let slot = match input {
            CalculatorInput::MassFlow => &mut self.mass_flow,
            CalculatorInput::ExhaustVelocity => &mut self.exhaust_velocity,
            CalculatorInput::AmbientPressure => &mut self.ambient_pressure,
            CalculatorInput::ExitPressure => &mut self.exit_pressure,
            CalculatorInput::ExitArea => &mut self.exit_area,
        };
        *slot = value;
        Ok(value)
    }

    pub fn set_from_str(&mut self, input: CalculatorInput, raw: &str) -> Result<f64, InputError> {
        let value = input.range().parse(raw)?;
        self.set(input, value)
    }

    pub fn outputs(&self) -> PropulsionOutputs {
        let thrust = thrust(
            self.mass_flow,
            self.exhaust_velocity,
            self.ambient_pressure,
            self.exit_pressure,
            self.exit_area,
        );
        PropulsionOutputs {
            thrust,
            specific_impulse: specific_impulse(thrust, self.mass_flow),
            chamber_temperature: chamber_temperature(self.exhaust_velocity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionOutputs {
    pub thrust: f64,              // N
    pub specific_impulse: f64,    // s
    pub chamber_temperature: f64, // K
}

impl PropulsionOutputs {
    pub fn thrust_display(&self) -> String {
        format!("{:.0}", self.thrust)
    }

    pub fn specific_impulse_display(&self) -> String {
        format!("{:.1}", self.specific_impulse)
    }

    pub fn chamber_temperature_display(&self) -> String {
        format!("{:.0}", self.chamber_temperature)
    }
}

/// Momentum thrust plus the pressure term: T = ṁ·vₑ + (pₑ − pₐ)·Aₑ
pub fn thrust(
    mass_flow: f64,
    exhaust_velocity: f64,
    ambient_pressure: f64,
    exit_pressure: f64,
    exit_area: f64,
) -> f64 {
    mass_flow * exhaust_velocity + (exit_pressure - ambient_pressure) * exit_area
}

/// Isp = T / (ṁ·g₀). Returns 0.0 when ṁ is zero or the quotient is not finite.
pub fn specific_impulse(thrust: f64, mass_flow: f64) -> f64 {
    if mass_flow == 0.0 {
        return 0.0;
    }
    let isp = thrust / (mass_flow * STANDARD_GRAVITY);
    if isp.is_finite() {
        isp
    } else {
        0.0
    }
}

/// Linear display heuristic, not a thermodynamic result.
pub fn chamber_temperature(exhaust_velocity: f64) -> f64 {
    CHAMBER_TEMP_BASE + (exhaust_velocity - CHAMBER_TEMP_REF_VELOCITY) * CHAMBER_TEMP_SLOPE
}

/// Digit-grouped rendering of an input value: at most three fraction
/// digits, trailing zeros dropped (`101325` -> `101,325`, `0.60` -> `0.6`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_configuration() {
        let out = CalculatorState::default().outputs();
        assert_relative_eq!(out.thrust, 818_205.0, epsilon = 1e-6);
        assert_relative_eq!(out.specific_impulse, 333.7348, epsilon = 1e-3);
        assert_relative_eq!(out.chamber_temperature, 3660.0);
        assert_eq!(out.thrust_display(), "818205");
        assert_eq!(out.specific_impulse_display(), "333.7");
        assert_eq!(out.chamber_temperature_display(), "3660");
    }

    #[test]
    fn test_zero_mass_flow_reports_sentinel() {
        assert_eq!(specific_impulse(818_205.0, 0.0), 0.0);
        assert_eq!(specific_impulse(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_mass_flow_is_clamped_at_input() {
        let mut state = CalculatorState::default();
        assert_eq!(state.set(CalculatorInput::MassFlow, 0.0), Ok(50.0));
        assert!(state.outputs().specific_impulse.is_finite());
    }

    #[test]
    fn test_clamps_each_bound() {
        let mut state = CalculatorState::default();
        for input in CalculatorInput::ALL {
            let range = input.range();
            assert_eq!(state.set(input, range.min - 1000.0), Ok(range.min));
            assert_eq!(state.set(input, range.max + 1000.0), Ok(range.max));
            assert_eq!(state.get(input), range.max);
        }
    }

    #[test]
    fn test_rejects_non_finite_and_keeps_previous() {
        let mut state = CalculatorState::default();
        assert!(matches!(
            state.set(CalculatorInput::ExhaustVelocity, f64::NAN),
            Err(InputError::NotFinite(_))
        ));
        assert_eq!(
            state.set(CalculatorInput::ExitArea, f64::INFINITY),
            Err(InputError::NotFinite(f64::INFINITY))
        );
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_set_from_str() {
        let mut state = CalculatorState::default();
        assert_eq!(state.set_from_str(CalculatorInput::ExitArea, " 1.25 "), Ok(1.25));
        assert_eq!(
            state.set_from_str(CalculatorInput::ExitArea, "wide"),
            Err(InputError::NotANumber("wide".to_string()))
        );
        assert_eq!(state.get(CalculatorInput::ExitArea), 1.25);
    }

    #[test]
    fn test_outputs_are_idempotent() {
        let state = CalculatorState::new(420.0, 2900.0, 50_000.0, 60_000.0, 1.1).unwrap();
        assert_eq!(state.outputs(), state.outputs());
    }

    #[test]
    fn test_pressure_term_sign() {
        // Over-expanded nozzle loses thrust, under-expanded gains it
        let base = 100.0 * 3000.0;
        assert!(thrust(100.0, 3000.0, 101_325.0, 50_000.0, 1.0) < base);
        assert!(thrust(100.0, 3000.0, 0.0, 50_000.0, 1.0) > base);
    }

    #[test]
    fn test_chamber_temperature_heuristic() {
        assert_eq!(chamber_temperature(2500.0), 3500.0);
        assert_relative_eq!(chamber_temperature(1500.0), 3300.0);
        assert_relative_eq!(chamber_temperature(4500.0), 3900.0);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(101_325.0), "101,325");
        assert_eq!(format_grouped(250.0), "250");
        assert_eq!(format_grouped(0.6), "0.6");
        assert_eq!(format_grouped(1_234_567.891), "1,234,567.891");
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(-1500.5), "-1,500.5");
    }
}
