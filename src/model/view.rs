/// Lifecycle of a page that loads data on mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageState<T> {
    #[default]
    Loading,
    Empty,
    Populated(T),
    NotFound,
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Populated(data) => Some(data),
            _ => None,
        }
    }
}

impl<R> PageState<Vec<R>> {
    /// `Empty` for an empty row set, `Populated` otherwise.
    pub fn from_rows(rows: Vec<R>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Populated(rows)
        }
    }
}

/// Which modal a list page shows, and for what.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState<T> {
    #[default]
    Closed,
    OpenCreate,
    OpenEdit(T),
}

impl<T> ModalState<T> {
    pub fn open_create(&mut self) {
        *self = Self::OpenCreate;
    }

    pub fn open_edit(&mut self, target: T) {
        *self = Self::OpenEdit(target);
    }

    /// Drops the edit target along with the modal.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            Self::OpenEdit(target) => Some(target),
            _ => None,
        }
    }
}
