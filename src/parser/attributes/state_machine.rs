//! Attribute list states, loosely modelled on the [attribute states] of the HTML
//! tokenization algorithm.
//!
//! [attribute states]: https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state

use super::AttributeSyntaxError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    BeforeName,
    Name,
    AfterName,
    BeforeValue,
    ValueDoubleQuoted,
    ValueSingleQuoted,
    ValueUnquoted,
    AfterQuotedValue,
}

/// What the parser does with the character that caused a transition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Skip,
    /// Steps the cursor back, so the character is consumed again in the new state.
    Reconsume,
    AppendToName,
    AppendToValue,
    EmitAttr,
    /// Emits the pending name without a value and reconsumes the character.
    EmitValuelessAttrAndReconsume,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: State,
    pub action: Action,
}

#[inline]
fn to(state: State, action: Action) -> Result<Transition, AttributeSyntaxError> {
    Ok(Transition { state, action })
}

impl State {
    pub fn transition(self, ch: char) -> Result<Transition, AttributeSyntaxError> {
        use self::Action::*;
        use self::State::*;

        match self {
            BeforeName => match ch {
                ch if ch.is_whitespace() => to(BeforeName, Skip),
                '=' => Err(AttributeSyntaxError::UnexpectedEqualsSign),
                _ => to(Name, Reconsume),
            },

            Name => match ch {
                ch if ch.is_whitespace() => to(AfterName, Skip),
                '=' => to(BeforeValue, Skip),
                '\0' | '"' | '\'' | '<' => Err(AttributeSyntaxError::UnexpectedCharInName(ch)),
                _ => to(Name, AppendToName),
            },

            AfterName => match ch {
                ch if ch.is_whitespace() => to(AfterName, Skip),
                '=' => to(BeforeValue, Skip),
                _ => to(Name, EmitValuelessAttrAndReconsume),
            },

            BeforeValue => match ch {
                ch if ch.is_whitespace() => to(BeforeValue, Skip),
                '"' => to(ValueDoubleQuoted, Skip),
                '\'' => to(ValueSingleQuoted, Skip),
                _ => to(ValueUnquoted, Reconsume),
            },

            ValueDoubleQuoted => match ch {
                '"' => to(AfterQuotedValue, EmitAttr),
                _ => to(ValueDoubleQuoted, AppendToValue),
            },

            ValueSingleQuoted => match ch {
                '\'' => to(AfterQuotedValue, EmitAttr),
                _ => to(ValueSingleQuoted, AppendToValue),
            },

            ValueUnquoted => match ch {
                ch if ch.is_whitespace() => to(BeforeName, EmitAttr),
                '"' | '\'' | '<' | '=' | '`' => {
                    Err(AttributeSyntaxError::UnexpectedCharInUnquotedValue(ch))
                }
                _ => to(ValueUnquoted, AppendToValue),
            },

            // NOTE: `/` starts a new attribute name here instead of marking the
            // tag as self-closing, so `<br/>` ends up with a `/` attribute.
            AfterQuotedValue => match ch {
                ch if ch.is_whitespace() => to(BeforeName, Skip),
                '/' => to(Name, Reconsume),
                _ => Err(AttributeSyntaxError::UnexpectedCharAfterQuotedValue(ch)),
            },
        }
    }
}
