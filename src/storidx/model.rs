use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// Identifier of one stored story.
///
/// Ids are dense and sequential: after any mutation settles the store holds
/// exactly the ids `0..N-1`. The on-disk format renders ids as decimal
/// strings, so that is how they serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoryId(u32);

impl StoryId {
    pub fn new(n: u32) -> Self {
        StoryId(n)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoryId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(StoryId)
            .map_err(|_| format!("Invalid story id: {}", s))
    }
}

impl Serialize for StoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Composite key identifying one token's slot within a story.
///
/// Rendered as `"<story_id>,<position>"` with `position` 1-based. Legacy
/// files may carry a derivation suffix (`"0,5.2"`) marking a repeated
/// occurrence; we never generate those but must load and order them without
/// falling over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub story: StoryId,
    pub position: u32,
    pub derivation: Option<String>,
}

impl PositionKey {
    pub fn new(story: StoryId, position: u32) -> Self {
        Self {
            story,
            position,
            derivation: None,
        }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.derivation {
            Some(suffix) => write!(f, "{},{}.{}", self.story, self.position, suffix),
            None => write!(f, "{},{}", self.story, self.position),
        }
    }
}

impl FromStr for PositionKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (story_part, pos_part) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid position key: {}", s))?;
        let story = story_part.parse()?;

        let (base, derivation) = match pos_part.split_once('.') {
            Some((base, suffix)) if !suffix.is_empty() => (base, Some(suffix.to_string())),
            Some(_) => return Err(format!("Invalid position key: {}", s)),
            None => (pos_part, None),
        };
        let position = base
            .parse::<u32>()
            .map_err(|_| format!("Invalid position key: {}", s))?;

        Ok(Self {
            story,
            position,
            derivation,
        })
    }
}

impl Ord for PositionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.story
            .cmp(&other.story)
            .then(self.position.cmp(&other.position))
            .then_with(|| match (&self.derivation, &other.derivation) {
                (None, None) => Ordering::Equal,
                // Base keys sort before derived ones at the same position
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => match (a.parse::<u32>(), b.parse::<u32>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => a.cmp(b),
                },
            })
    }
}

impl PartialOrd for PositionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for PositionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PositionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Token slots of one story, ordered by numeric key.
pub type TokenMap = BTreeMap<PositionKey, String>;

/// The whole collection, keyed by story id.
pub type StoryMap = BTreeMap<StoryId, Story>;

/// One stored text document.
///
/// The serde renames are the on-disk contract inherited from the data files
/// this tool exchanges; they must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "índice")]
    pub id: StoryId,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "total_tokens")]
    pub token_count: usize,
    #[serde(rename = "Tokens individuais")]
    pub tokens: TokenMap,
}

impl Story {
    pub fn new(id: StoryId, name: &str, tokens: TokenMap) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            token_count: tokens.len(),
            tokens,
        }
    }

    /// Rebinds the story to a new id, rewriting every position-key prefix so
    /// the "key prefix == story id" invariant survives renumbering.
    pub fn with_id(self, new_id: StoryId) -> Self {
        let tokens: TokenMap = self
            .tokens
            .into_iter()
            .map(|(key, token)| {
                (
                    PositionKey {
                        story: new_id,
                        ..key
                    },
                    token,
                )
            })
            .collect();
        Self {
            id: new_id,
            name: self.name,
            token_count: tokens.len(),
            tokens,
        }
    }
}
