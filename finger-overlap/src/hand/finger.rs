//! Finger identities used by overlap instructions ("ring4>middle3")

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::landmarks::{INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP};

/// The five fingers, in landmark order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    /// Collector label, e.g. "ring4" (1-based finger number appended)
    pub fn label(&self) -> String {
        format!("{}{}", self.as_str(), self.number())
    }

    /// 1-based finger number, thumb = 1
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn tip(&self) -> usize {
        match self {
            Finger::Thumb => THUMB_TIP,
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }

    /// Contiguous 4-landmark block from base joint to tip
    pub fn landmarks(&self) -> Range<usize> {
        let tip = self.tip();
        tip - 3..tip + 1
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Finger {
    type Err = String;

    /// Accepts bare names ("ring") and collector labels ("ring4").
    /// A trailing number must match the finger.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let name = s.trim_end_matches(|c: char| c.is_ascii_digit());
        let finger = Finger::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| format!("unknown finger: {s}"))?;

        let number = &s[name.len()..];
        if number.is_empty() || number.parse::<usize>().ok() == Some(finger.number()) {
            Ok(finger)
        } else {
            Err(format!("finger number mismatch: {s}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_blocks() {
        assert_eq!(Finger::Thumb.landmarks(), 1..5);
        assert_eq!(Finger::Index.landmarks(), 5..9);
        assert_eq!(Finger::Middle.landmarks(), 9..13);
        assert_eq!(Finger::Ring.landmarks(), 13..17);
        assert_eq!(Finger::Pinky.landmarks(), 17..21);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("ring4".parse::<Finger>(), Ok(Finger::Ring));
        assert_eq!("Middle3".parse::<Finger>(), Ok(Finger::Middle));
        assert_eq!("thumb".parse::<Finger>(), Ok(Finger::Thumb));
        assert!("ring3".parse::<Finger>().is_err());
        assert!("toe1".parse::<Finger>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        for finger in Finger::ALL {
            assert_eq!(finger.label().parse::<Finger>(), Ok(finger));
        }
    }
}
