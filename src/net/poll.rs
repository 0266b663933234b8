// Refresh cycle and direction sending. Requests are never cancelled; a
// ticket taken before each request lets the reducer drop superseded replies.
use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use super::api::{self, FetchError};
use crate::model::{Direction, DirectionReply, Point, StatsReply, Ticket, TicketCounter, ViewAction};

pub const POLL_INTERVAL_MS: u32 = 1000;

/// The three backend calls the poller makes.
pub trait Backend: Clone + 'static {
    fn fetch_stats(&self) -> impl Future<Output = Result<StatsReply, FetchError>>;
    fn fetch_coords(&self) -> impl Future<Output = Result<Point, FetchError>>;
    fn send_direction(&self, direction: Direction) -> impl Future<Output = Result<DirectionReply, FetchError>>;
}

/// The real backend on the hosting origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

impl Backend for HttpBackend {
    async fn fetch_stats(&self) -> Result<StatsReply, FetchError> {
        let started = js_sys::Date::now();
        let result = api::fetch_stats().await;
        log::debug!("stats settled in {:.0}ms", js_sys::Date::now() - started);
        result
    }

    async fn fetch_coords(&self) -> Result<Point, FetchError> {
        let started = js_sys::Date::now();
        let result = api::fetch_coords().await;
        log::debug!("coords settled in {:.0}ms", js_sys::Date::now() - started);
        result
    }

    async fn send_direction(&self, direction: Direction) -> Result<DirectionReply, FetchError> {
        api::send_direction(direction).await
    }
}

pub fn stats_action(ticket: Ticket, result: Result<StatsReply, FetchError>) -> ViewAction {
    match result {
        Ok(reply) => ViewAction::StatsLoaded { ticket, reply },
        Err(e) => {
            log::error!("error fetching stats: {e}");
            ViewAction::StatsFailed { ticket }
        }
    }
}

pub fn coords_action(ticket: Ticket, result: Result<Point, FetchError>) -> ViewAction {
    match result {
        Ok(point) => ViewAction::CoordsLoaded { ticket, point },
        Err(e) => {
            log::error!("error fetching coords: {e}");
            ViewAction::CoordsFailed { ticket }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionOutcome {
    /// Accepted; refresh now instead of waiting for the next tick.
    Refresh,
    Ignore,
}

pub fn direction_outcome(direction: Direction, result: &Result<DirectionReply, FetchError>) -> DirectionOutcome {
    match result {
        Ok(reply) if reply.is_ok() => {
            log::info!(
                "direction sent: {}",
                reply.direction.as_deref().unwrap_or(direction.token())
            );
            DirectionOutcome::Refresh
        }
        Ok(reply) => {
            log::error!(
                "direction {} rejected: status={} {}",
                direction.token(),
                reply.status,
                reply.message.as_deref().unwrap_or("")
            );
            DirectionOutcome::Ignore
        }
        Err(e) => {
            log::error!("error sending direction {}: {e}", direction.token());
            DirectionOutcome::Ignore
        }
    }
}

/// Owns the per-endpoint ticket counters and feeds results into the view reducer.
#[derive(Clone)]
pub struct Poller<B = HttpBackend> {
    backend: B,
    dispatch: Callback<ViewAction>,
    stats: TicketCounter,
    coords: TicketCounter,
}

impl Poller<HttpBackend> {
    pub fn new(dispatch: Callback<ViewAction>) -> Self {
        Self::with_backend(HttpBackend, dispatch)
    }
}

impl<B: Backend> Poller<B> {
    pub fn with_backend(backend: B, dispatch: Callback<ViewAction>) -> Self {
        Self {
            backend,
            dispatch,
            stats: TicketCounter::default(),
            coords: TicketCounter::default(),
        }
    }

    /// Fires both fetches on the event loop; neither waits on the other.
    pub fn refresh(&self) {
        let this = self.clone();
        spawn_local(async move { this.refresh_once().await });
    }

    pub fn send_direction(&self, direction: Direction) {
        let this = self.clone();
        spawn_local(async move {
            this.direction_once(direction).await;
        });
    }

    /// One stats fetch and one coords fetch, run concurrently. Each result is
    /// dispatched as soon as it settles.
    pub async fn refresh_once(&self) {
        let stats_ticket = self.stats.issue();
        let coords_ticket = self.coords.issue();
        let stats = async {
            let result = self.backend.fetch_stats().await;
            self.dispatch.emit(stats_action(stats_ticket, result));
        };
        let coords = async {
            let result = self.backend.fetch_coords().await;
            self.dispatch.emit(coords_action(coords_ticket, result));
        };
        futures::join!(stats, coords);
    }

    /// Sends one command; an accepted one is followed by exactly one refresh.
    pub async fn direction_once(&self, direction: Direction) -> DirectionOutcome {
        let result = self.backend.send_direction(direction).await;
        let outcome = direction_outcome(direction, &result);
        if outcome == DirectionOutcome::Refresh {
            self.refresh_once().await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn reply(status: &str) -> DirectionReply {
        DirectionReply {
            status: status.to_string(),
            direction: Some("UP".to_string()),
            message: None,
        }
    }

    #[derive(Default)]
    struct Script {
        stats_calls: usize,
        coords_calls: usize,
        sent: Vec<Direction>,
        coords: Option<Result<Point, FetchError>>,
        direction: Option<Result<DirectionReply, FetchError>>,
    }

    #[derive(Clone, Default)]
    struct FakeBackend(Rc<RefCell<Script>>);

    impl Backend for FakeBackend {
        async fn fetch_stats(&self) -> Result<StatsReply, FetchError> {
            self.0.borrow_mut().stats_calls += 1;
            Ok(StatsReply { fps: Some(30.0), total_frames: Some(90), last_update: Some(0.5) })
        }

        async fn fetch_coords(&self) -> Result<Point, FetchError> {
            let mut s = self.0.borrow_mut();
            s.coords_calls += 1;
            s.coords.clone().unwrap_or(Ok(Point { x: 3.0, y: -2.0 }))
        }

        async fn send_direction(&self, direction: Direction) -> Result<DirectionReply, FetchError> {
            let mut s = self.0.borrow_mut();
            s.sent.push(direction);
            s.direction.clone().unwrap_or_else(|| Ok(reply("ok")))
        }
    }

    fn label(action: &ViewAction) -> &'static str {
        match action {
            ViewAction::StatsLoaded { .. } => "stats",
            ViewAction::StatsFailed { .. } => "stats-failed",
            ViewAction::CoordsLoaded { .. } => "coords",
            ViewAction::CoordsFailed { .. } => "coords-failed",
        }
    }

    fn poller(backend: &FakeBackend) -> (Poller<FakeBackend>, Rc<RefCell<Vec<&'static str>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let dispatch = Callback::from(move |action: ViewAction| sink.borrow_mut().push(label(&action)));
        (Poller::with_backend(backend.clone(), dispatch), seen)
    }

    fn calls(backend: &FakeBackend) -> (usize, usize) {
        let s = backend.0.borrow();
        (s.stats_calls, s.coords_calls)
    }

    #[test]
    fn first_refresh_loads_stats_and_coords() {
        let backend = FakeBackend::default();
        let (poller, seen) = poller(&backend);
        block_on(poller.refresh_once());
        assert_eq!(calls(&backend), (1, 1));
        let mut seen = seen.borrow().clone();
        seen.sort_unstable();
        assert_eq!(seen, vec!["coords", "stats"]);
    }

    #[test]
    fn each_refresh_takes_new_tickets() {
        let backend = FakeBackend::default();
        let (poller, _) = poller(&backend);
        block_on(poller.refresh_once());
        block_on(poller.refresh_once());
        assert_eq!(poller.stats.issue(), poller.coords.issue());
        assert_eq!(calls(&backend), (2, 2));
    }

    #[test]
    fn coords_failure_dispatches_fallback() {
        let backend = FakeBackend::default();
        backend.0.borrow_mut().coords = Some(Err(FetchError::Transport("offline".into())));
        let (poller, seen) = poller(&backend);
        block_on(poller.refresh_once());
        assert!(seen.borrow().contains(&"coords-failed"));
        assert!(seen.borrow().contains(&"stats"));
    }

    #[test]
    fn ok_reply_triggers_exactly_one_refresh() {
        let backend = FakeBackend::default();
        let (poller, seen) = poller(&backend);
        let outcome = block_on(poller.direction_once(Direction::Up));
        assert_eq!(outcome, DirectionOutcome::Refresh);
        assert_eq!(backend.0.borrow().sent, vec![Direction::Up]);
        assert_eq!(calls(&backend), (1, 1));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn rejected_or_failed_send_triggers_no_refresh() {
        for result in [
            Ok(reply("error")),
            Err(FetchError::Status(400)),
            Err(FetchError::Transport("offline".into())),
            Err(FetchError::Decode("eof".into())),
        ] {
            let backend = FakeBackend::default();
            backend.0.borrow_mut().direction = Some(result);
            let (poller, seen) = poller(&backend);
            let outcome = block_on(poller.direction_once(Direction::Left));
            assert_eq!(outcome, DirectionOutcome::Ignore);
            assert_eq!(calls(&backend), (0, 0));
            assert!(seen.borrow().is_empty());
        }
    }

    #[test]
    fn failed_stats_fetch_keeps_display() {
        let tickets = TicketCounter::default();
        let t = tickets.issue();
        let action = stats_action(t, Err(FetchError::Decode("eof".into())));
        assert!(matches!(action, ViewAction::StatsFailed { ticket } if ticket == t));
        let action = stats_action(t, Ok(StatsReply::default()));
        assert!(matches!(action, ViewAction::StatsLoaded { .. }));
    }
}
