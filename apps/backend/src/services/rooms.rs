//! Room registry: matchmaking, per-room locking and the turn clock.
//!
//! Rooms share nothing but this registry. Each room's [`GameMaster`] sits
//! behind its own mutex, so commands and clock ticks for one room are
//! serialized while different rooms run in parallel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::{
    derive_room_seed, game_rng, Command, CommandOutcome, Lexicon, Player, RoomId, TurnInfo,
};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::services::game_master::{GameMaster, TickEvent};

pub const MIN_ROOM_CAPACITY: usize = 1;
pub const MAX_ROOM_CAPACITY: usize = 4;
pub const MAX_NAME_LEN: usize = 16;

pub struct Room {
    id: RoomId,
    capacity: usize,
    game: Mutex<GameMaster>,
}

impl Room {
    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Exclusive access to the room's game.
    pub fn lock(&self) -> MutexGuard<'_, GameMaster> {
        self.game.lock()
    }

    fn accepts(&self, capacity: usize) -> bool {
        if self.capacity != capacity {
            return false;
        }
        let game = self.game.lock();
        !game.is_started() && game.players().len() < self.capacity
    }
}

pub struct RoomRegistry {
    rooms: DashMap<RoomId, Arc<Room>>,
    /// Player name to room, for every seated player.
    names: DashMap<String, RoomId>,
    next_id: AtomicU64,
    /// Serializes seating so two joins cannot take the last seat of a room.
    join_lock: Mutex<()>,
    lexicon: Arc<dyn Lexicon>,
    config: GameConfig,
}

impl RoomRegistry {
    pub fn new(lexicon: Arc<dyn Lexicon>, config: GameConfig) -> Self {
        Self {
            rooms: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicU64::new(1),
            join_lock: Mutex::new(()),
            lexicon,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> Option<Arc<Room>> {
        self.rooms.get(&id).map(|r| Arc::clone(r.value()))
    }

    pub fn room_of(&self, name: &str) -> Option<RoomId> {
        self.names.get(name).map(|r| *r.value())
    }

    fn snapshot_rooms(&self) -> Vec<Arc<Room>> {
        self.rooms.iter().map(|r| Arc::clone(r.value())).collect()
    }

    /// Seat `name` in an open room of the requested capacity, creating one if
    /// needed. The game starts as soon as the room is full.
    pub fn join(
        &self,
        name: &str,
        socket_id: &str,
        capacity: usize,
        now: Instant,
    ) -> Result<RoomId, AppError> {
        validate_name(name)?;
        if !(MIN_ROOM_CAPACITY..=MAX_ROOM_CAPACITY).contains(&capacity) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Room capacity must be {MIN_ROOM_CAPACITY} to {MAX_ROOM_CAPACITY}, got {capacity}"),
            )
            .into());
        }

        let _guard = self.join_lock.lock();
        if self.names.contains_key(name) {
            return Err(
                DomainError::conflict(ConflictKind::NameTaken, format!("{name} is taken")).into(),
            );
        }

        let room = match self
            .snapshot_rooms()
            .into_iter()
            .filter(|r| r.accepts(capacity))
            .min_by_key(|r| r.id)
        {
            Some(room) => room,
            None => self.create_room(capacity, now),
        };

        let mut game = room.lock();
        game.add_player(Player::new(name, socket_id, room.id))?;
        self.names.insert(name.to_string(), room.id);
        info!(room_id = room.id, player = name, seated = game.players().len(), capacity, "Player joined");

        if game.players().len() == room.capacity {
            game.start_game(now)?;
        }
        Ok(room.id)
    }

    fn create_room(&self, capacity: usize, now: Instant) -> Arc<Room> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let seed = self.config.rng_seed.map(|base| derive_room_seed(base, id));
        let game = GameMaster::new(
            id,
            Arc::clone(&self.lexicon),
            self.config.turn_policy,
            game_rng(seed),
            now,
        );
        let room = Arc::new(Room {
            id,
            capacity,
            game: Mutex::new(game),
        });
        self.rooms.insert(id, Arc::clone(&room));
        debug!(room_id = id, capacity, seeded = seed.is_some(), "Room created");
        room
    }

    /// Route a command to the sender's room.
    pub fn dispatch(
        &self,
        name: &str,
        command: &Command,
        now: Instant,
    ) -> Result<CommandOutcome, AppError> {
        let room = self.require_room_of(name)?;
        let outcome = room.lock().handle_command(name, command, now);
        Ok(outcome)
    }

    /// Remove a player from their room. Rooms nobody is playing in are dropped.
    pub fn leave(&self, name: &str, now: Instant) -> Result<(), AppError> {
        let _guard = self.join_lock.lock();
        let room = self.require_room_of(name)?;

        let empty = {
            let mut game = room.lock();
            game.quit(name, now)?;
            game.players().iter().all(|p| p.has_quit())
        };
        self.names.remove(name);

        if empty {
            self.rooms.remove(&room.id);
            info!(room_id = room.id, "Room closed");
        }
        Ok(())
    }

    /// Snapshots of every started room.
    pub fn turn_infos(&self, now: Instant) -> Vec<(RoomId, TurnInfo)> {
        let mut infos: Vec<(RoomId, TurnInfo)> = self
            .snapshot_rooms()
            .into_iter()
            .filter_map(|room| {
                let game = room.lock();
                let info = game.is_started().then(|| game.turn_info(now));
                info.map(|info| (room.id, info))
            })
            .collect();
        infos.sort_by_key(|(id, _)| *id);
        infos
    }

    /// Advance every room's clock once.
    pub fn tick_all(&self, now: Instant) -> Vec<(RoomId, TickEvent)> {
        self.snapshot_rooms()
            .into_iter()
            .filter_map(|room| {
                let event = room.lock().tick(now);
                event.map(|event| (room.id, event))
            })
            .collect()
    }

    /// Background task ticking every room at the configured interval.
    pub fn spawn_turn_clock(self: Arc<Self>) -> JoinHandle<()> {
        let period = self.config.tick_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                for (room_id, event) in self.tick_all(Instant::now()) {
                    info!(room_id, event = ?event, "Turn clock event");
                }
            }
        })
    }

    fn require_room_of(&self, name: &str) -> Result<Arc<Room>, AppError> {
        let id = self.room_of(name).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("{name} is not seated"))
        })?;
        self.room(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("Room {id} is gone")).into()
        })
    }
}

/// Names are 1 to 16 ASCII letters or digits.
fn validate_name(name: &str) -> Result<(), DomainError> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("Name must be 1 to {MAX_NAME_LEN} letters or digits, got {name:?}"),
        ));
    }
    Ok(())
}
