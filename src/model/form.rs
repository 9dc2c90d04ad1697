/// Submit lifecycle shared by every modal form.
///
/// `Idle → Submitting → Idle | Failed(msg)`. A new submit clears the previous error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl FormStatus {
    /// Enters `Submitting`, returns `false` if a submit is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn finish_ok(&mut self) {
        *self = Self::Idle;
    }

    pub fn finish_err(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
