//! ギャラリー用の画像モーダル（ページに1つだけ）

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ImageRef),
}

impl ModalState {
    /// 開いている場合は画像を差し替える
    pub fn open(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        *self = ModalState::Open(ImageRef {
            src: src.into(),
            alt: alt.into(),
        });
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn image(&self) -> Option<&ImageRef> {
        match self {
            ModalState::Open(image) => Some(image),
            ModalState::Closed => None,
        }
    }
}
