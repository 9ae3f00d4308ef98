use crate::domain::model::{Role, TeamRecord};
use crate::domain::ports::{Producer, Step};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Lead,
    Manager,
    Engineer,
    Exhausted,
}

impl Cursor {
    fn role(self) -> Option<Role> {
        match self {
            Cursor::Lead => Some(Role::Lead),
            Cursor::Manager => Some(Role::Manager),
            Cursor::Engineer => Some(Role::Engineer),
            Cursor::Exhausted => None,
        }
    }

    fn advance(self) -> Self {
        match self {
            Cursor::Lead => Cursor::Manager,
            Cursor::Manager => Cursor::Engineer,
            Cursor::Engineer | Cursor::Exhausted => Cursor::Exhausted,
        }
    }

    fn remaining(self) -> usize {
        match self {
            Cursor::Lead => 3,
            Cursor::Manager => 2,
            Cursor::Engineer => 1,
            Cursor::Exhausted => 0,
        }
    }
}

/// Single-pass producer of a team's lead, manager and engineer names,
/// in that order. Borrows the team read-only.
#[derive(Debug, Clone)]
pub struct FieldExtractor<'a> {
    team: &'a TeamRecord,
    cursor: Cursor,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(team: &'a TeamRecord) -> Self {
        Self {
            team,
            cursor: Cursor::Lead,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }
}

impl<'a> Producer for FieldExtractor<'a> {
    type Item = &'a str;

    fn produce_next(&mut self) -> Step<&'a str> {
        match self.cursor.role() {
            Some(role) => {
                self.cursor = self.cursor.advance();
                Step::Yield(self.team.name_for(role))
            }
            None => Step::Done,
        }
    }
}

impl<'a> Iterator for FieldExtractor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.produce_next().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldExtractor<'_> {}

impl FusedIterator for FieldExtractor<'_> {}

impl TeamRecord {
    pub fn extractor(&self) -> FieldExtractor<'_> {
        FieldExtractor::new(self)
    }
}

impl<'a> IntoIterator for &'a TeamRecord {
    type Item = &'a str;
    type IntoIter = FieldExtractor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        FieldExtractor::new(self)
    }
}

/// Turns any `Producer` into an `Iterator`.
///
/// Stops for good at the first `Step::Done`, even if the producer would
/// later yield again.
#[derive(Debug, Clone)]
pub struct ProducerIter<P> {
    producer: P,
    finished: bool,
}

impl<P: Producer> ProducerIter<P> {
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            finished: false,
        }
    }
}

impl<P: Producer> Iterator for ProducerIter<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        if self.finished {
            return None;
        }
        match self.producer.produce_next() {
            Step::Yield(value) => Some(value),
            Step::Done => {
                self.finished = true;
                None
            }
        }
    }
}

impl<P: Producer> FusedIterator for ProducerIter<P> {}

/// Pulls from `producer` until it is done, appending every value to `out`.
/// Returns how many values were appended.
pub fn drain_into<P, T>(producer: &mut P, out: &mut Vec<T>) -> usize
where
    P: Producer,
    P::Item: Into<T>,
{
    let mut count = 0;
    while let Step::Yield(value) = producer.produce_next() {
        out.push(value.into());
        count += 1;
    }
    count
}

pub fn extract_names(team: &TeamRecord) -> Vec<String> {
    let mut names = Vec::with_capacity(Role::ORDER.len());
    let appended = drain_into(&mut FieldExtractor::new(team), &mut names);
    tracing::debug!("Extracted {} names from {} team", appended, team.department);
    names
}
