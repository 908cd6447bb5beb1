use samtal_core::models::{ChatLog, Message, ScriptEntry, ScriptLibrary};

mod replay_tests {
    use super::*;

    #[test]
    fn test_library_restarts_from_first_script() {
        let mut library = ScriptLibrary::builtin();
        let total = library.len();

        let mut order = Vec::new();
        for _ in 0..total * 2 {
            let (index, _) = library.next_script();
            order.push(index);
        }
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_each_pass_triggers_booking_exactly_once() {
        let mut library = ScriptLibrary::builtin();
        for _ in 0..library.len() {
            let (_, script) = library.next_script();
            let sentinels = script
                .entries
                .iter()
                .filter(|e| matches!(e, ScriptEntry::OpenBooking))
                .count();
            assert_eq!(sentinels, 1, "script '{}'", script.name);
        }
    }

    #[test]
    fn test_sentinel_is_the_final_entry_of_every_builtin_script() {
        let library = ScriptLibrary::builtin();
        for script in library.scripts() {
            assert!(script.entries.last().unwrap().is_sentinel());
        }
    }
}

mod eviction_tests {
    use super::*;

    #[test]
    fn test_overflow_fades_oldest_first_and_keeps_recent_cap_opaque() {
        let mut log = ChatLog::new(4);
        let texts: Vec<String> = (0..7).map(|i| format!("rad {i}")).collect();
        for text in &texts {
            log.push(Message::bot(text), false);
        }

        let states: Vec<(String, bool)> = log
            .iter()
            .map(|e| (e.message.text.clone(), e.is_fading()))
            .collect();

        // 7 pushed, cap 4: the three oldest fade, the newest four stay.
        for (text, fading) in &states[..3] {
            assert!(fading, "{text} should be fading");
        }
        for (text, fading) in &states[3..] {
            assert!(!fading, "{text} should be opaque");
        }
        assert_eq!(log.opaque_count(), 4);
    }

    #[test]
    fn test_a_full_script_pass_through_the_log_settles_at_cap() {
        let mut library = ScriptLibrary::builtin();
        let (_, script) = library.next_script();
        let mut log = ChatLog::new(4);

        for entry in &script.entries {
            if let Some(text) = entry.text() {
                log.push(Message::bot(text), false);
                // run the fade to completion between messages
                for _ in 0..32 {
                    log.tick(8);
                }
            }
        }

        assert_eq!(log.len(), 4);
        assert_eq!(log.opaque_count(), 4);
    }
}
