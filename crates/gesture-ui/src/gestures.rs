//! Catalog of hand poses the recognizer reports.

/// Hand gestures that can be bound to an action from the settings grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Index and pinky raised, middle and ring folded.
    RockAndRoll,
    /// Thumb extended upwards, other fingers folded.
    ThumbsUp,
    /// Thumb extended downwards, other fingers folded.
    ThumbsDown,
    /// Index finger only.
    OneFinger,
    /// Index and middle fingers.
    Peace,
    /// All five fingers extended.
    OpenHand,
    /// All fingers folded.
    Fist,
    /// Four fingers with the thumb folded.
    FourFingers,
    /// Index, middle and ring fingers.
    ThreeFingers,
}

impl Gesture {
    /// All gestures in the order the recognizer evaluates them.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::RockAndRoll,
            Self::ThumbsUp,
            Self::ThumbsDown,
            Self::OneFinger,
            Self::Peace,
            Self::OpenHand,
            Self::Fist,
            Self::FourFingers,
            Self::ThreeFingers,
        ]
    }

    /// Display label, identical to the name the recognizer emits.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RockAndRoll => "Rock & Roll",
            Self::ThumbsUp => "Thumbs Up",
            Self::ThumbsDown => "Thumbs Down",
            Self::OneFinger => "1 finger",
            Self::Peace => "Peace",
            Self::OpenHand => "Open Hand",
            Self::Fist => "Fist",
            Self::FourFingers => "4 fingers",
            Self::ThreeFingers => "3 fingers",
        }
    }

    /// Resolve a recognizer name back to a gesture. Matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|gesture| gesture.label() == label)
    }

    /// Labels for every gesture, in catalog order.
    #[must_use]
    pub fn labels() -> Vec<String> {
        Self::all()
            .into_iter()
            .map(|gesture| gesture.label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Gesture;

    #[test]
    fn labels_resolve_back_to_gestures() {
        for gesture in Gesture::all() {
            assert_eq!(Gesture::from_label(gesture.label()), Some(gesture));
        }
    }

    #[test]
    fn from_label_is_case_sensitive() {
        assert_eq!(Gesture::from_label("Fist"), Some(Gesture::Fist));
        assert_eq!(Gesture::from_label("fist"), None);
        assert_eq!(Gesture::from_label("No Gesture"), None);
    }

    #[test]
    fn labels_follow_catalog_order() {
        let labels = Gesture::labels();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels.first().map(String::as_str), Some("Rock & Roll"));
        assert_eq!(labels.last().map(String::as_str), Some("3 fingers"));
    }
}
