/// Character cursor over a `str` input that can step back by one character,
/// so a state machine can reconsume the current character in another state.
#[derive(Debug, Default)]
pub struct Cursor {
    next_pos: usize,
    last_ch_len: usize,
}

impl Cursor {
    /// Byte offset of the most recently consumed character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.next_pos - self.last_ch_len
    }

    #[inline]
    pub fn consume_ch(&mut self, input: &str) -> Option<char> {
        let ch = input.get(self.next_pos..)?.chars().next();

        if let Some(ch) = ch {
            self.last_ch_len = ch.len_utf8();
            self.next_pos += self.last_ch_len;
        }

        trace!(@chars "consume {:?}", ch);

        ch
    }

    // NOTE: only the last consumed character can be reconsumed. This
    // is all the attribute state machine ever needs, as every reconsume
    // is followed by a consume in the next state.
    #[inline]
    pub fn unconsume_ch(&mut self) {
        self.next_pos -= self.last_ch_len;
        self.last_ch_len = 0;

        trace!(@chars "unconsume");
    }
}
