use std::collections::VecDeque;

use super::message::Message;

/// Animation ticks a bubble spends fading before it is dropped.
pub const FADE_TICKS: u8 = 12;

/// A message plus its presentation state: how much of the text has been
/// revealed, and how far along its fade-out is. The reveal counter is in
/// characters, never bytes, so slicing stays on char boundaries.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub message: Message,
    revealed: usize,
    fade: Option<u8>,
}

impl ChatEntry {
    fn new(message: Message, animate: bool) -> Self {
        let total = message.text.chars().count();
        Self {
            message,
            revealed: if animate { 0 } else { total },
            fade: None,
        }
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// 1.0 for an opaque bubble, falling toward 0.0 while fading.
    pub fn opacity(&self) -> f32 {
        match self.fade {
            None => 1.0,
            Some(left) => f32::from(left) / f32::from(FADE_TICKS),
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed >= self.message.text.chars().count()
    }

    /// The visible prefix of the message text.
    pub fn revealed_text(&self) -> String {
        if self.is_fully_revealed() {
            self.message.text.clone()
        } else {
            self.message.text.chars().take(self.revealed).collect()
        }
    }

    fn advance(&mut self, reveal_chars: usize) {
        if !self.is_fully_revealed() {
            self.revealed += reveal_chars;
        }
    }

    fn start_fade(&mut self) {
        if self.fade.is_none() {
            self.fade = Some(FADE_TICKS);
        }
    }

    /// Returns false once the fade has run out and the entry should go.
    fn tick_fade(&mut self) -> bool {
        match self.fade {
            None => true,
            Some(0) => false,
            Some(left) => {
                self.fade = Some(left - 1);
                true
            }
        }
    }
}

/// The append-only message list behind the chat view. Owned by the UI
/// thread; background tasks only ever reach it through driver events.
///
/// Once more than `visible_cap` bubbles are opaque, the oldest overflow
/// entries start fading and are dropped when their fade runs out. The
/// typing indicator is not a log entry and is never evicted.
#[derive(Debug)]
pub struct ChatLog {
    entries: VecDeque<ChatEntry>,
    visible_cap: usize,
}

impl ChatLog {
    pub fn new(visible_cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            visible_cap: visible_cap.max(1),
        }
    }

    pub fn visible_cap(&self) -> usize {
        self.visible_cap
    }

    /// Append a message. With `animate` the text reveals incrementally on
    /// subsequent ticks; without, it appears whole.
    pub fn push(&mut self, message: Message, animate: bool) {
        self.entries.push_back(ChatEntry::new(message, animate));
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        let mut opaque = self.entries.iter().filter(|e| !e.is_fading()).count();
        if opaque <= self.visible_cap {
            return;
        }
        for entry in self.entries.iter_mut() {
            if opaque <= self.visible_cap {
                break;
            }
            if !entry.is_fading() {
                entry.start_fade();
                opaque -= 1;
            }
        }
    }

    /// One animation tick: advance reveals, run fades, drop finished ones.
    pub fn tick(&mut self, reveal_chars: usize) {
        for entry in self.entries.iter_mut() {
            entry.advance(reveal_chars);
        }
        self.entries.retain_mut(|entry| entry.tick_fade());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn opaque_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_fading()).count()
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_n(log: &mut ChatLog, n: usize) {
        for i in 0..n {
            log.push(Message::bot(format!("meddelande {i}")), false);
        }
    }

    #[test]
    fn test_eviction_marks_oldest_beyond_cap() {
        let mut log = ChatLog::new(4);
        push_n(&mut log, 6);

        let fading: Vec<bool> = log.iter().map(|e| e.is_fading()).collect();
        assert_eq!(fading, vec![true, true, false, false, false, false]);
        assert_eq!(log.opaque_count(), 4);
    }

    #[test]
    fn test_under_cap_nothing_fades() {
        let mut log = ChatLog::new(4);
        push_n(&mut log, 4);
        assert_eq!(log.opaque_count(), 4);
        assert!(log.iter().all(|e| !e.is_fading()));
    }

    #[test]
    fn test_faded_entries_are_dropped() {
        let mut log = ChatLog::new(2);
        push_n(&mut log, 3);
        assert_eq!(log.len(), 3);

        for _ in 0..=u32::from(FADE_TICKS) + 1 {
            log.tick(0);
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.opaque_count(), 2);
    }

    #[test]
    fn test_reveal_advances_by_chars() {
        let mut log = ChatLog::new(4);
        log.push(Message::bot("Hej världen"), true);
        assert_eq!(log.last().unwrap().revealed_text(), "");

        log.tick(3);
        assert_eq!(log.last().unwrap().revealed_text(), "Hej");

        for _ in 0..10 {
            log.tick(3);
        }
        assert!(log.last().unwrap().is_fully_revealed());
        assert_eq!(log.last().unwrap().revealed_text(), "Hej världen");
    }

    #[test]
    fn test_unanimated_push_is_fully_revealed() {
        let mut log = ChatLog::new(4);
        log.push(Message::user("Ja, absolut!"), false);
        assert!(log.last().unwrap().is_fully_revealed());
    }

    #[test]
    fn test_multibyte_reveal_stays_on_char_boundaries() {
        let mut log = ChatLog::new(4);
        log.push(Message::bot("åäö 🚀"), true);
        log.tick(2);
        assert_eq!(log.last().unwrap().revealed_text(), "åä");
    }

    #[test]
    fn test_zero_cap_is_clamped_to_one() {
        let log = ChatLog::new(0);
        assert_eq!(log.visible_cap(), 1);
    }
}
