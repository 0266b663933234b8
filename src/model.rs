//! Wire types for the tracker backend and the view state they feed.
//!
//! `ViewState` is driven by a Yew reducer. Every response carries the ticket
//! its request was issued under, and a response older than the last one
//! applied for the same endpoint is discarded, so overlapping polls cannot
//! roll the view back to stale values.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use yew::Reducible;

use crate::util::{format_last_update, format_number, format_pair};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn label(&self) -> String {
        format_pair(self.x, self.y)
    }
}

/// `GET /stats`. Before the first frame the backend answers with only a
/// `status` field, which decodes to all-`None`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatsReply {
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub total_frames: Option<u64>,
    #[serde(default)]
    pub last_update: Option<f64>,
}

/// `GET /coords`.
pub type CoordsReply = Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Right, Direction::Down];

    /// Token the backend matches on.
    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Left => "◀",
            Direction::Right => "▶",
        }
    }

    /// Arrow keys and WASD.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectionRequest<'a> {
    pub direction: &'a str,
}

/// `POST /direction` reply. Only `status == "ok"` counts as success.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DirectionReply {
    pub status: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DirectionReply {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Request sequence number, ordered by issue time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Hands out increasing tickets for one endpoint.
#[derive(Clone, Debug, Default)]
pub struct TicketCounter {
    last: Rc<Cell<u64>>,
}

impl TicketCounter {
    pub fn issue(&self) -> Ticket {
        let next = self.last.get() + 1;
        self.last.set(next);
        Ticket(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsDisplay {
    pub fps: String,
    pub total_frames: String,
    pub last_update: String,
}

impl Default for StatsDisplay {
    fn default() -> Self {
        Self {
            fps: "0".to_string(),
            total_frames: "0".to_string(),
            last_update: "-".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub point: Point,
    pub stats: StatsDisplay,
    stats_applied: Ticket,
    coords_applied: Ticket,
}

pub enum ViewAction {
    StatsLoaded { ticket: Ticket, reply: StatsReply },
    StatsFailed { ticket: Ticket },
    CoordsLoaded { ticket: Ticket, point: Point },
    CoordsFailed { ticket: Ticket },
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ViewAction::*;
        match action {
            StatsLoaded { ticket, reply } => {
                if ticket <= self.stats_applied {
                    log::debug!("dropping superseded stats reply {ticket:?}");
                    return self;
                }
                let mut new = (*self).clone();
                new.stats_applied = ticket;
                // no fps: frozen display
                if let Some(fps) = reply.fps {
                    new.stats.fps = format_number(fps);
                    if let Some(total) = reply.total_frames {
                        new.stats.total_frames = total.to_string();
                    }
                    if let Some(secs) = reply.last_update {
                        new.stats.last_update = format_last_update(secs);
                    }
                }
                Rc::new(new)
            }
            StatsFailed { ticket } => {
                if ticket <= self.stats_applied {
                    return self;
                }
                let mut new = (*self).clone();
                new.stats_applied = ticket;
                Rc::new(new)
            }
            CoordsLoaded { ticket, point } => self.apply_point(ticket, point),
            CoordsFailed { ticket } => self.apply_point(ticket, Point::ORIGIN),
        }
    }
}

impl ViewState {
    fn apply_point(self: Rc<Self>, ticket: Ticket, point: Point) -> Rc<Self> {
        if ticket <= self.coords_applied {
            log::debug!("dropping superseded coords reply {ticket:?}");
            return self;
        }
        let mut new = (*self).clone();
        new.coords_applied = ticket;
        new.point = point;
        Rc::new(new)
    }
}
