//! The base grid-world state machine.

use crate::config::WorldConfig;
use crate::environment::{action_kind, cursor_move_from, Environment};
use crate::error::{StepError, WorldError};
use ndarray::{s, Array2, ArrayView2, Ix1, Ix4};
use numgrid_core::{Action, Observation, Step, StepInfo, Vec2, NO_GUESS};
use numgrid_idx::load_idx;
use numgrid_space::{ActionSpace, Discrete, MultiDiscrete, ObservationSpace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::Read;
use tracing::debug;

/// Reward magnitude for a digit guess: `+3` correct, `-3` incorrect.
pub const GUESS_REWARD: f64 = 3.0;

/// A grid world of handwritten-digit tiles with a movable cursor.
///
/// The world owns an immutable pixel mosaic assembled at construction from
/// dataset records, the per-tile labels, and the mutable cursor state. An
/// action is a `(digit guess, target position)` pair: the guess is scored
/// against the digit under the cursor's center, then the cursor moves to
/// the target if it is in bounds.
///
/// Cursor positions range over `[0, mosaic_size - cursor_size]` per axis;
/// an out-of-bounds target leaves the cursor unchanged and is flagged in
/// the step's `info`, never raised as an error.
#[derive(Debug)]
pub struct NumGrid {
    mosaic: Array2<u8>,
    labels: Array2<u8>,
    /// Pixel size of one tile, width first.
    tile_size: Vec2,
    cursor_size: Vec2,
    cursor_pos: Vec2,
    digit_space: Discrete,
    position_space: MultiDiscrete,
    num_steps: Option<u32>,
    step_count: u32,
    rng: ChaCha8Rng,
}

impl NumGrid {
    /// Build a world by loading the datasets named in `config`.
    ///
    /// File handles are opened, read, and dropped within this call.
    ///
    /// # Errors
    ///
    /// Configuration, dataset, and space errors; see [`WorldError`].
    pub fn new(config: &WorldConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let images = File::open(&config.images_path).map_err(numgrid_idx::IdxError::from)?;
        let labels = File::open(&config.labels_path).map_err(numgrid_idx::IdxError::from)?;
        Self::from_readers(config, images, labels)
    }

    /// Build a world from already-open gzip IDX streams.
    ///
    /// Labels are loaded in full first; if `config.digits` restricts the
    /// eligible labels, the needed record indices are selected from them
    /// and only those image records are read — a sparse load that never
    /// materializes the rest of the file.
    pub fn from_readers<I: Read, L: Read>(
        config: &WorldConfig,
        images: I,
        labels: L,
    ) -> Result<Self, WorldError> {
        config.validate()?;
        let (grid_w, grid_h) = (config.size.0 as usize, config.size.1 as usize);
        let needed = config.tile_count();

        let all_labels = load_idx::<u8, _>(labels, None, None)?
            .into_dimensionality::<Ix1>()
            .map_err(|_| WorldError::RecordRank { ndim: 0 })?;

        let picks: Vec<usize> = match &config.digits {
            Some(digits) => all_labels
                .iter()
                .enumerate()
                .filter(|(_, label)| digits.contains(label))
                .map(|(i, _)| i)
                .take(needed)
                .collect(),
            None => (0..needed.min(all_labels.len())).collect(),
        };
        if picks.len() < needed {
            return Err(WorldError::NotEnoughRecords {
                needed,
                available: picks.len(),
            });
        }

        let images = load_idx::<u8, _>(images, Some(&[grid_h, grid_w]), Some(&picks))?;
        let record_ndim = images.ndim().saturating_sub(2);
        let images = images
            .into_dimensionality::<Ix4>()
            .map_err(|_| WorldError::RecordRank { ndim: record_ndim })?;
        let (_, _, tile_h, tile_w) = images.dim();

        let mut mosaic = Array2::zeros((grid_h * tile_h, grid_w * tile_w));
        for gy in 0..grid_h {
            for gx in 0..grid_w {
                mosaic
                    .slice_mut(s![
                        gy * tile_h..(gy + 1) * tile_h,
                        gx * tile_w..(gx + 1) * tile_w
                    ])
                    .assign(&images.slice(s![gy, gx, .., ..]));
            }
        }
        let labels =
            Array2::from_shape_fn((grid_h, grid_w), |(gy, gx)| all_labels[picks[gy * grid_w + gx]]);

        let (mosaic_h, mosaic_w) = mosaic.dim();
        let (cursor_w, cursor_h) = (config.cursor_size.0 as usize, config.cursor_size.1 as usize);
        if cursor_w > mosaic_w || cursor_h > mosaic_h {
            return Err(WorldError::CursorTooLarge {
                cursor: config.cursor_size,
                mosaic: (mosaic_w, mosaic_h),
            });
        }
        let position_space = MultiDiscrete::new(&[
            (mosaic_w - cursor_w) as i64,
            (mosaic_h - cursor_h) as i64,
        ])?;

        debug!(
            tiles = needed,
            mosaic_w, mosaic_h, "assembled digit mosaic"
        );

        Ok(Self {
            mosaic,
            labels,
            tile_size: Vec2::new(tile_w as i64, tile_h as i64),
            cursor_size: Vec2::new(cursor_w as i64, cursor_h as i64),
            cursor_pos: Vec2::new(0, 0),
            digit_space: Discrete::new(NO_GUESS as u64 + 1)?,
            position_space,
            num_steps: config.num_steps,
            step_count: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        })
    }

    /// The digit currently under the cursor's center.
    pub fn current_digit(&self) -> u8 {
        let center = self.cursor_center();
        let gx = (center.x / self.tile_size.x) as usize;
        let gy = (center.y / self.tile_size.y) as usize;
        self.labels[[gy, gx]]
    }

    /// The cursor's center position, integer-truncated.
    pub fn cursor_center(&self) -> Vec2 {
        self.cursor_pos + Vec2::new(self.cursor_size.x / 2, self.cursor_size.y / 2)
    }

    /// The cursor's pixel view on the mosaic.
    ///
    /// Read-only; provided for rendering collaborators.
    pub fn cursor_view(&self) -> ArrayView2<'_, u8> {
        let (x, y) = (self.cursor_pos.x as usize, self.cursor_pos.y as usize);
        let (w, h) = (self.cursor_size.x as usize, self.cursor_size.y as usize);
        self.mosaic.slice(s![y..y + h, x..x + w])
    }

    /// The assembled pixel mosaic.
    pub fn mosaic(&self) -> &Array2<u8> {
        &self.mosaic
    }

    /// The per-tile labels, `(grid_height, grid_width)`.
    pub fn labels(&self) -> &Array2<u8> {
        &self.labels
    }

    /// Cursor size in pixels, width first.
    pub fn cursor_size(&self) -> Vec2 {
        self.cursor_size
    }

    /// The space of valid cursor positions.
    pub fn position_space(&self) -> &MultiDiscrete {
        &self.position_space
    }

    /// The digit-guess space, `[0, 10]`.
    pub fn digit_space(&self) -> Discrete {
        self.digit_space
    }
}

impl Environment for NumGrid {
    fn reset(&mut self) -> Result<Observation, StepError> {
        self.cursor_pos = self
            .position_space
            .sample_pos(&mut self.rng)
            .unwrap_or_default();
        self.step_count = 0;
        Ok(Observation::Position(self.cursor_pos))
    }

    fn step(&mut self, action: Action) -> Result<Step, StepError> {
        let (digit, pos) = match action {
            Action::DigitPosition { digit, pos } => (digit, pos),
            other => {
                return Err(StepError::UnsupportedAction {
                    expected: "digit+position",
                    found: action_kind(&other),
                })
            }
        };
        if digit > NO_GUESS {
            return Err(StepError::InvalidGuess { digit });
        }

        // Scored against the digit under the cursor before it moves.
        let observed = self.current_digit();
        let mut reward = 0.0;
        if digit < NO_GUESS {
            reward += if digit == observed {
                GUESS_REWARD
            } else {
                -GUESS_REWARD
            };
        }

        let mut info = StepInfo {
            out_of_bounds: false,
            digit: observed,
        };
        if self.position_space.contains_pos(pos) {
            self.cursor_pos = pos;
        } else {
            info.out_of_bounds = true;
        }

        self.step_count += 1;
        let done = self.num_steps.is_some_and(|n| self.step_count >= n);

        Ok(Step {
            observation: Observation::Position(self.cursor_pos),
            reward,
            done,
            info,
        })
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::DigitPosition {
            digit: self.digit_space,
            position: self.position_space.clone(),
        }
    }

    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::Position(self.position_space.clone())
    }

    fn cursor_pos(&self) -> Vec2 {
        self.cursor_pos
    }

    fn cursor_move(&self, direction: Vec2, distance: i64) -> Vec2 {
        cursor_move_from(self.cursor_pos, direction, distance)
    }
}
