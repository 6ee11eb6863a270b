use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};
use std::thread;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

mod work_queue;

use crate::config::{INF, MAX_THREADS};
use crate::types::solver::ShortestPathResult;
use crate::{GraphView, ShortestPath};
use work_queue::{QueueEntry, WorkQueue};

/// The work-stealing parallel engine.
///
/// `T` workers cooperate through per-worker priority queues: every
/// tentative entry for vertex `v` is routed to queue `v % T` (its owner
/// queue), which keeps all entries for one vertex together and off the
/// other queues. Distances are relaxed through a CAS loop that commits
/// only strictly smaller values, so `dist[v]` is monotone non-increasing
/// and at most O(E) commits can happen in total; each commit re-enqueues
/// the improved vertex, which is how successors get re-relaxed from the
/// then-current distance. Entries whose recorded distance no longer
/// matches `dist[v]` are obsolete and dropped on pop.
///
/// An idle worker first drains its own queue, then tries to steal from a
/// random victim, and only then considers the run finished — quiescence is
/// `tasks == 0 && active == 0`, i.e. no entry is queued *and* no worker
/// holds one in flight. Workers that fail to acquire work while the
/// predicate is still false park on a single condition variable; every
/// push and the sticky `done` flag notify it.
///
/// All atomics use relaxed ordering on purpose: the final thread join is
/// the one synchronization point, and it publishes the settled `dist` and
/// `parent` vectors to the caller.
pub struct ParallelDijkstra<'g, G> {
    graph: &'g G,
    start: usize,
    threads: usize,
}

impl<'g, G> ParallelDijkstra<'g, G>
where
    G: GraphView + Sync,
{
    /// Creates a solver for the given graph and source vertex.
    ///
    /// `threads == 0` substitutes the logical CPU count (floored at 1);
    /// any value is clamped to [`MAX_THREADS`].
    ///
    /// # Panics
    /// Panics if `start` is not a vertex of the graph; an in-range source
    /// is part of the caller contract.
    pub fn new(graph: &'g G, start: usize, threads: usize) -> Self {
        assert!(
            graph.contains_vertex(start),
            "start vertex {start} out of range"
        );
        Self {
            graph,
            start,
            threads,
        }
    }

    /// Reconfigures the worker count for subsequent runs.
    pub fn set_threads(&mut self, threads: usize) {
        self.threads = threads;
    }
}

impl<G> ShortestPath for ParallelDijkstra<'_, G>
where
    G: GraphView + Sync,
{
    fn run(&self) -> ShortestPathResult {
        let threads = resolve_thread_count(self.threads);
        let n = self.graph.number_vertices();

        debug!(vertices = n, threads, "parallel shortest-path run starting");

        let state = EngineState {
            graph: self.graph,
            threads,
            dist: (0..n).map(|_| AtomicU64::new(INF)).collect(),
            parent: (0..n).map(|_| AtomicI64::new(-1)).collect(),
            queues: (0..threads).map(|_| WorkQueue::new()).collect(),
            tasks: AtomicI64::new(0),
            active: AtomicUsize::new(0),
            done: AtomicBool::new(false),
            park_lock: Mutex::new(()),
            park_cv: Condvar::new(),
        };

        state.dist[self.start].store(0, Ordering::Relaxed);
        state.push_task(QueueEntry {
            dist: 0,
            vertex: self.start,
        });

        thread::scope(|scope| {
            for worker in 0..threads {
                let state = &state;
                scope.spawn(move || state.run_worker(worker));
            }
        });

        // The joins above synchronize with everything the workers did, so
        // plain reads below observe the final committed values.
        debug!(vertices = n, threads, "parallel shortest-path run finished");

        ShortestPathResult {
            dist: state.dist.into_iter().map(AtomicU64::into_inner).collect(),
            parent: state
                .parent
                .into_iter()
                .map(AtomicI64::into_inner)
                .collect(),
        }
    }
}

fn resolve_thread_count(requested: usize) -> usize {
    let threads = if requested == 0 {
        thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
    } else {
        requested
    };
    threads.clamp(1, MAX_THREADS)
}

/// Everything the workers share for the duration of one run.
struct EngineState<'g, G> {
    graph: &'g G,
    threads: usize,
    dist: Vec<AtomicU64>,
    parent: Vec<AtomicI64>,
    queues: Vec<WorkQueue>,

    // Entries enqueued minus entries popped. Signed: a stealer can pop an
    // entry before its producer's increment lands, dipping the counter
    // below zero for a moment.
    tasks: AtomicI64,
    // Workers currently holding a popped entry, from pop until the end of
    // its relaxation.
    active: AtomicUsize,
    done: AtomicBool,
    park_lock: Mutex<()>,
    park_cv: Condvar,
}

impl<G: GraphView + Sync> EngineState<'_, G> {
    fn push_task(&self, entry: QueueEntry) {
        self.queues[entry.vertex % self.threads].push(entry);
        self.tasks.fetch_add(1, Ordering::Relaxed);
        self.park_cv.notify_one();
    }

    /// Local pop first, then a stealing pass over the other queues.
    fn acquire(&self, own: usize, rng: &mut SmallRng) -> Option<QueueEntry> {
        self.queues[own].pop_min().or_else(|| self.steal(own, rng))
    }

    /// Scans all queues in rotation from a random victim offset, skipping
    /// our own queue and any queue whose lock is currently held.
    fn steal(&self, own: usize, rng: &mut SmallRng) -> Option<QueueEntry> {
        if self.threads <= 1 {
            return None;
        }

        let offset = rng.gen_range(0..self.threads);
        for attempt in 0..self.threads {
            let victim = (offset + attempt) % self.threads;
            if victim == own {
                continue;
            }
            if let Some(entry) = self.queues[victim].try_steal() {
                return Some(entry);
            }
        }
        None
    }

    fn quiescent(&self) -> bool {
        self.tasks.load(Ordering::Relaxed) == 0 && self.active.load(Ordering::Relaxed) == 0
    }

    fn finish_if_quiescent(&self) {
        if self.quiescent() {
            self.done.store(true, Ordering::Relaxed);
            self.park_cv.notify_all();
        }
    }

    fn run_worker(&self, own: usize) {
        // Thread-local victim selection; never a process-global generator.
        let mut rng = SmallRng::seed_from_u64(rand::random::<u64>() ^ own as u64);

        loop {
            let Some(cur) = self.acquire(own, &mut rng) else {
                if self.quiescent() {
                    self.done.store(true, Ordering::Relaxed);
                    self.park_cv.notify_all();
                    break;
                }

                // Someone is still working; park until a push or `done`.
                let guard = self.park_lock.lock().unwrap();
                let guard = self
                    .park_cv
                    .wait_while(guard, |_| {
                        self.tasks.load(Ordering::Relaxed) <= 0
                            && !self.done.load(Ordering::Relaxed)
                    })
                    .unwrap();
                drop(guard);

                // Re-check after waking: the wake may have been `done`.
                if self.quiescent() {
                    break;
                }
                continue;
            };

            // `active` goes up before `tasks` goes down, so the window in
            // which this entry is popped but not yet inspected is covered
            // and the quiescence predicate cannot fire under us.
            self.active.fetch_add(1, Ordering::Relaxed);
            self.tasks.fetch_sub(1, Ordering::Relaxed);

            let d_now = self.dist[cur.vertex].load(Ordering::Relaxed);
            if cur.dist != d_now {
                // Obsolete entry: a smaller distance was committed for this
                // vertex after the entry was pushed.
                self.active.fetch_sub(1, Ordering::Relaxed);
                self.finish_if_quiescent();
                continue;
            }

            for &(to, w) in self.graph.neighbors(cur.vertex) {
                let nd = d_now + u64::from(w);
                let mut old = self.dist[to].load(Ordering::Relaxed);

                // Monotone relaxation: commit only strictly smaller values.
                while nd < old {
                    match self.dist[to].compare_exchange_weak(
                        old,
                        nd,
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    ) {
                        Ok(_) => {
                            self.parent[to].store(cur.vertex as i64, Ordering::Relaxed);
                            self.push_task(QueueEntry {
                                dist: nd,
                                vertex: to,
                            });
                            break;
                        }
                        Err(observed) => old = observed,
                    }
                }
            }

            self.active.fetch_sub(1, Ordering::Relaxed);
            self.finish_if_quiescent();
        }
    }
}
