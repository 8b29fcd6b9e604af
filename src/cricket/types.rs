use crate::cli::types::Role;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;


/// Ball-by-ball datasets use "NA" for absent names.
fn is_absent(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NA")
}

fn de_lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|r| r.parse().ok()))
}

fn de_optional_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.filter(|r| !is_absent(r)).map(|r| r.trim().to_string()))
}

fn de_fielders<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Fielders {
        One(String),
        Many(Vec<String>),
    }

    let raw: Option<Fielders> = Deserialize::deserialize(deserializer)?;
    let names = match raw {
        None => Vec::new(),
        Some(Fielders::One(name)) => vec![name],
        Some(Fielders::Many(names)) => names,
    };
    Ok(names
        .into_iter()
        .filter(|n| !is_absent(n))
        .map(|n| n.trim().to_string())
        .collect())
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

fn de_wicket_kind<'de, D>(deserializer: D) -> Result<Option<WicketKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.filter(|r| !is_absent(r)).map(|r| WicketKind::from_label(&r)))
}

fn default_innings() -> u8 {
    1
}

/// A rostered player, as listed in the roster source (`{"Player": .., "Role": ..}`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    #[serde(rename = "Player")]
    pub name: String,
    /// `None` when the roster spells the role in a way we do not recognise
    #[serde(rename = "Role", deserialize_with = "de_lenient_role", default)]
    pub role: Option<Role>,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role: Some(role),
        }
    }
}

/// Name-indexed view over the roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: BTreeMap<String, Option<Role>>,
}

impl Roster {
    pub fn new(players: &[Player]) -> Self {
        Self {
            players: players
                .iter()
                .map(|p| (p.name.clone(), p.role))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    /// Role of a player, `None` if unknown or role-less.
    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.players.get(name).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl From<&[Player]> for Roster {
    fn from(players: &[Player]) -> Self {
        Roster::new(players)
    }
}

/// How a batter was dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WicketKind {
    Bowled,
    Lbw,
    Caught,
    CaughtAndBowled,
    RunOut,
    Stumped,
    HitWicket,
    Other(String),
}

impl WicketKind {
    /// Parse a dataset label such as `"caught and bowled"` or `"run out"`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "bowled" => WicketKind::Bowled,
            "lbw" => WicketKind::Lbw,
            "caught" => WicketKind::Caught,
            "caught and bowled" => WicketKind::CaughtAndBowled,
            "run out" => WicketKind::RunOut,
            "stumped" => WicketKind::Stumped,
            "hit wicket" => WicketKind::HitWicket,
            _ => WicketKind::Other(label.trim().to_string()),
        }
    }

    /// Whether the bowler is credited with the wicket.
    pub fn credits_bowler(&self) -> bool {
        !matches!(self, WicketKind::RunOut)
    }

    /// Bowled and lbw dismissals earn the bowler a bonus.
    pub fn is_unassisted(&self) -> bool {
        matches!(self, WicketKind::Bowled | WicketKind::Lbw)
    }
}

impl fmt::Display for WicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WicketKind::Bowled => "bowled",
            WicketKind::Lbw => "lbw",
            WicketKind::Caught => "caught",
            WicketKind::CaughtAndBowled => "caught and bowled",
            WicketKind::RunOut => "run out",
            WicketKind::Stumped => "stumped",
            WicketKind::HitWicket => "hit wicket",
            WicketKind::Other(label) => label,
        };
        write!(f, "{}", s)
    }
}

impl Serialize for WicketKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One ball of a match, in ball-by-ball dataset layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Delivery {
    #[serde(default = "default_innings")]
    pub innings: u8,
    #[serde(rename = "overs")]
    pub over: u32,
    #[serde(rename = "ballnumber", default)]
    pub ball: Option<u8>,
    pub batter: String,
    pub bowler: String,
    #[serde(default, deserialize_with = "de_optional_name")]
    pub non_striker: Option<String>,
    #[serde(rename = "fielders_involved", default, deserialize_with = "de_fielders")]
    pub fielders: Vec<String>,
    #[serde(rename = "batsman_run", default)]
    pub batter_runs: u32,
    #[serde(rename = "isWicketDelivery", default, deserialize_with = "de_flag")]
    pub is_wicket: bool,
    #[serde(default, deserialize_with = "de_wicket_kind")]
    pub kind: Option<WicketKind>,
    #[serde(default, deserialize_with = "de_optional_name")]
    pub player_out: Option<String>,
}

impl Delivery {
    /// A dot ball with no dismissal.
    pub fn new(over: u32, batter: &str, bowler: &str, non_striker: &str) -> Self {
        Self {
            innings: 1,
            over,
            ball: None,
            batter: batter.to_string(),
            bowler: bowler.to_string(),
            non_striker: Some(non_striker.to_string()),
            fielders: Vec::new(),
            batter_runs: 0,
            is_wicket: false,
            kind: None,
            player_out: None,
        }
    }

    pub fn with_runs(mut self, runs: u32) -> Self {
        self.batter_runs = runs;
        self
    }

    pub fn with_innings(mut self, innings: u8) -> Self {
        self.innings = innings;
        self
    }

    /// Mark the delivery as a dismissal of the batter.
    pub fn with_wicket(mut self, kind: WicketKind) -> Self {
        self.is_wicket = true;
        self.kind = Some(kind);
        self
    }

    pub fn with_fielder(mut self, fielder: &str) -> Self {
        self.fielders.push(fielder.to_string());
        self
    }

    pub fn with_player_out(mut self, player: &str) -> Self {
        self.player_out = Some(player.to_string());
        self
    }

    /// The dismissed player on a wicket delivery.
    pub fn dismissed(&self) -> Option<&str> {
        if !self.is_wicket {
            return None;
        }
        Some(self.player_out.as_deref().unwrap_or(&self.batter))
    }

    /// Everybody named on this delivery, in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        [Some(self.batter.as_str()), Some(self.bowler.as_str())]
            .into_iter()
            .chain(std::iter::once(self.non_striker.as_deref()))
            .flatten()
            .chain(self.fielders.iter().map(String::as_str))
            .chain(self.player_out.as_deref())
    }
}

/// Accumulated match statistics and fantasy points for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchStats {
    pub role: Option<Role>,
    pub runs: u32,
    pub wickets: u32,
    pub maidens: u32,
    pub catches: u32,
    pub out: bool,
    pub points: i64,
}

impl PlayerMatchStats {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }
}

/// Final per-player table for one match, ordered by player name.
pub type MatchStats = BTreeMap<String, PlayerMatchStats>;
