use colored::{ColoredString, Colorize};

/// Semantic severity of a reported state, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Healthy,
    Degraded,
    Idle,
    Neutral,
}

/// Classify a virtual-disk state string.
pub fn vd_tone(state: &str) -> Tone {
    match state {
        "Optl" => Tone::Healthy,
        "Dgrd" => Tone::Degraded,
        ""     => Tone::Idle,
        _      => Tone::Neutral,
    }
}

/// Classify a physical-disk state string.
pub fn pd_tone(state: &str) -> Tone {
    match state {
        "Onln" | "DHS" => Tone::Healthy,
        "Failed"       => Tone::Degraded,
        _              => Tone::Idle,
    }
}

/// Virtual-disk rows are drawn bold; the tone picks the color.
pub fn paint_vd(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Healthy  => text.blue().bold(),
        Tone::Degraded => text.red().bold(),
        Tone::Idle     => text.yellow().bold(),
        Tone::Neutral  => text.bold(),
    }
}

pub fn paint_pd(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Healthy              => text.green(),
        Tone::Degraded             => text.red(),
        Tone::Idle | Tone::Neutral => text.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vd_states_classify() {
        assert_eq!(vd_tone("Optl"), Tone::Healthy);
        assert_eq!(vd_tone("Dgrd"), Tone::Degraded);
        assert_eq!(vd_tone(""), Tone::Idle);
        assert_eq!(vd_tone("Rec"), Tone::Neutral);
    }

    #[test]
    fn pd_states_classify() {
        assert_eq!(pd_tone("Onln"), Tone::Healthy);
        assert_eq!(pd_tone("DHS"), Tone::Healthy);
        assert_eq!(pd_tone("Failed"), Tone::Degraded);
        assert_eq!(pd_tone("UGood"), Tone::Idle);
        assert_eq!(pd_tone(""), Tone::Idle);
    }
}
