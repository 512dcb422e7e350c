use std::fmt;

/// Errors raised when a group size or calendar parameter is invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Group sizes start at one person
    GroupSizeTooSmall(u32),
    /// A calendar needs at least one day to draw birthdays from
    NoDays,
    /// Sweep group sizes must be strictly ascending
    UnorderedGroupSizes {
        index: usize,
        previous: u32,
        current: u32,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::GroupSizeTooSmall(n) => {
                write!(f, "group size {n} is invalid (must be at least 1)")
            }
            InputError::NoDays => write!(f, "days in year must be at least 1"),
            InputError::UnorderedGroupSizes {
                index,
                previous,
                current,
            } => write!(
                f,
                "group sizes must be strictly ascending (index {index}: {current} follows {previous})"
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Errors raised when constructing a trial count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialCountError {
    /// Zero trials would divide by zero when estimating
    Zero,
    /// Value lies outside the slider bounds
    OutOfBounds { value: u32, min: u32, max: u32 },
    /// Slider bounds with `min > max`
    InvertedBounds { min: u32, max: u32 },
    /// Slider bounds with a zero step
    ZeroStep,
}

impl fmt::Display for TrialCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialCountError::Zero => write!(f, "trial count must be greater than zero"),
            TrialCountError::OutOfBounds { value, min, max } => {
                write!(f, "trial count {value} is outside [{min}, {max}]")
            }
            TrialCountError::InvertedBounds { min, max } => {
                write!(f, "trial bounds are inverted: min {min} > max {max}")
            }
            TrialCountError::ZeroStep => write!(f, "trial bounds step must be greater than zero"),
        }
    }
}

impl std::error::Error for TrialCountError {}

/// Errors that abort a whole sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    Input(InputError),
    /// A newer request superseded this sweep
    Cancelled,
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Input(e) => write!(f, "{e}"),
            SweepError::Cancelled => write!(f, "sweep cancelled"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Input(e) => Some(e),
            SweepError::Cancelled => None,
        }
    }
}

impl From<InputError> for SweepError {
    fn from(err: InputError) -> Self {
        SweepError::Input(err)
    }
}
