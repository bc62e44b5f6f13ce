use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::game::{HandOutcome, Team};
use crate::player::BidRound;

/// The seat that named trump and the round it was named in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub seat: usize,
    pub round: BidRound,
    pub trump: Suit,
}

/// One trick: who led, every card in play order, and who took it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub leader: usize,
    /// `(seat, card)` pairs, the led card first
    pub plays: Vec<(usize, Card)>,
    pub winner: usize,
}

/// Complete record of a Euchre hand.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Zero-based position of this hand within its game
    pub hand_number: u32,
    pub dealer: usize,
    pub upcard: Card,
    pub bid: Bid,
    pub tricks: Vec<TrickRecord>,
    /// Tricks taken, indexed by team
    pub tricks_won: [u32; 2],
    pub winner: Team,
    pub outcome: HandOutcome,
    pub points: u32,
    /// Game score after this hand, indexed by team
    pub scores: [u32; 2],
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSONL file and hands out sequential ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only numbers hands and writes nothing.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
