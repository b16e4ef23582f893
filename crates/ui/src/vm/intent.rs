use dioxus::prelude::Key;
use services::SessionPhase;

/// User actions forwarded to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer(usize),
    Advance,
    Restart,
}

/// Keyboard shortcuts: `1`-`4` or `a`-`d` pick an option while the question is open,
/// `Enter` advances once the next control is showing.
#[must_use]
pub fn intent_for_key(key: &Key, phase: SessionPhase, next_visible: bool) -> Option<QuizIntent> {
    match key {
        Key::Enter if phase == SessionPhase::Answered && next_visible => {
            Some(QuizIntent::Advance)
        }
        Key::Character(value) if phase == SessionPhase::Unanswered => {
            let mut chars = value.chars();
            let ch = chars.next()?.to_ascii_lowercase();
            if chars.next().is_some() {
                return None;
            }
            match ch {
                '1'..='4' => Some(QuizIntent::Answer(ch as usize - '1' as usize)),
                'a'..='d' => Some(QuizIntent::Answer(ch as usize - 'a' as usize)),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(value: &str) -> Key {
        Key::Character(value.to_string())
    }

    #[test]
    fn digits_and_letters_map_to_options() {
        let phase = SessionPhase::Unanswered;
        assert_eq!(intent_for_key(&ch("1"), phase, false), Some(QuizIntent::Answer(0)));
        assert_eq!(intent_for_key(&ch("4"), phase, false), Some(QuizIntent::Answer(3)));
        assert_eq!(intent_for_key(&ch("b"), phase, false), Some(QuizIntent::Answer(1)));
        assert_eq!(intent_for_key(&ch("D"), phase, false), Some(QuizIntent::Answer(3)));
        assert_eq!(intent_for_key(&ch("5"), phase, false), None);
        assert_eq!(intent_for_key(&ch("e"), phase, false), None);
    }

    #[test]
    fn option_keys_do_nothing_once_answered() {
        assert_eq!(intent_for_key(&ch("1"), SessionPhase::Answered, true), None);
        assert_eq!(intent_for_key(&ch("a"), SessionPhase::Idle, false), None);
    }

    #[test]
    fn enter_waits_for_next_control() {
        assert_eq!(intent_for_key(&Key::Enter, SessionPhase::Answered, false), None);
        assert_eq!(
            intent_for_key(&Key::Enter, SessionPhase::Answered, true),
            Some(QuizIntent::Advance)
        );
        assert_eq!(intent_for_key(&Key::Enter, SessionPhase::Unanswered, true), None);
    }
}
