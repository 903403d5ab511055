use crate::grid::StationId;
use crate::signal::StopSignal;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Returned by [`ExchangeCoordinator::exchange`] when the caller's stop
/// signal fires before a partner arrives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("exchange abandoned: stop requested while waiting for a partner")]
pub struct Cancelled;

// How often a parked caller wakes up to check its stop signal.
const STOP_POLL: Duration = Duration::from_millis(10);

#[derive(Debug)]
struct Pending {
    ticket: u64,
    row: Vec<StationId>,
    reply: Sender<Vec<StationId>>,
}

/// Two-party rendezvous shared by the whole worker population. The first
/// caller parks; the next caller pairs with the oldest parked one and both
/// leave with each other's row. Pairing is strictly arrival order — with
/// three callers pending the third waits for a fourth.
#[derive(Debug, Default)]
pub struct ExchangeCoordinator {
    pending: Mutex<VecDeque<Pending>>,
    tickets: AtomicU64,
}

impl ExchangeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands `row` to the next paired caller and returns that caller's row
    /// in exchange. Blocks until a partner arrives or `stop` fires; a stop
    /// that loses the race against a partner completes as a normal
    /// exchange, so the partner is never left holding a dead hand-off.
    pub fn exchange(
        &self,
        row: Vec<StationId>,
        stop: &StopSignal,
    ) -> Result<Vec<StationId>, Cancelled> {
        if stop.is_stopped() {
            return Err(Cancelled);
        }

        let (ticket, rx) = {
            let mut pending = self.pending.lock().unwrap();
            if let Some(partner) = pending.pop_front() {
                // Once popped, the partner is committed to receiving. The
                // send only fails if its thread already died, and then the
                // row has nowhere to go anyway.
                let _ = partner.reply.send(row);
                return Ok(partner.row);
            }
            let (tx, rx) = mpsc::channel();
            let ticket = self.tickets.fetch_add(1, Ordering::Relaxed);
            pending.push_back(Pending {
                ticket,
                row,
                reply: tx,
            });
            (ticket, rx)
        };

        loop {
            match rx.recv_timeout(STOP_POLL) {
                Ok(partner_row) => return Ok(partner_row),
                Err(RecvTimeoutError::Timeout) => {
                    if stop.is_stopped() {
                        let mut pending = self.pending.lock().unwrap();
                        if let Some(pos) = pending.iter().position(|p| p.ticket == ticket) {
                            pending.remove(pos);
                            return Err(Cancelled);
                        }
                        drop(pending);
                        // Already matched; the partner's row is in flight.
                        return rx.recv().map_err(|_| Cancelled);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return Err(Cancelled),
            }
        }
    }

    /// Number of callers currently parked.
    pub fn waiting(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}
