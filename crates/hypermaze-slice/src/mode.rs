/// How many of the three visible axes vary at once when enumerating the
/// cross-section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliceMode {
    OneD,
    TwoD,
    #[default]
    ThreeD,
}

impl SliceMode {
    /// Number of axes varied per sub-slice.
    #[inline]
    pub fn dims(self) -> usize {
        match self {
            SliceMode::OneD => 1,
            SliceMode::TwoD => 2,
            SliceMode::ThreeD => 3,
        }
    }

    /// Forward cycle: 3D -> 2D -> 1D -> 3D.
    #[inline]
    pub fn cycled_forward(self) -> SliceMode {
        match self {
            SliceMode::ThreeD => SliceMode::TwoD,
            SliceMode::TwoD => SliceMode::OneD,
            SliceMode::OneD => SliceMode::ThreeD,
        }
    }

    /// Backward cycle: 3D -> 1D -> 2D -> 3D. Not the reverse of the
    /// forward cycle: a single backward step from 3D lands on 1D.
    #[inline]
    pub fn cycled_backward(self) -> SliceMode {
        match self {
            SliceMode::ThreeD => SliceMode::OneD,
            SliceMode::OneD => SliceMode::TwoD,
            SliceMode::TwoD => SliceMode::ThreeD,
        }
    }
}
