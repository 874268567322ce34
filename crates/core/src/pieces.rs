//! Pieces module - tetromino shapes and SRS rotation with wall kicks
//!
//! Every kind carries the full four rotation states (the O piece is simply
//! identical in all four). Kick resolution is strictly first-legal-match:
//! offsets are tried in table order and the first one that validates wins,
//! even if a later offset would also fit.
//!
//! Reference: https://tetris.wiki/SRS

use goldfall_types::{PieceKind, Rotation, SPAWN_POSITION};

/// Offset of a single mino relative to the piece's 4x4 box origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets
pub type PieceShape = [MinoOffset; 4];

/// Rotation states per kind, indexed N=0, E=1, S=2, W=3
type ShapeTable = [PieceShape; 4];

const I_SHAPES: ShapeTable = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

// O occupies the same cells in every state.
const O_SHAPES: ShapeTable = [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4];

const T_SHAPES: ShapeTable = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_SHAPES: ShapeTable = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_SHAPES: ShapeTable = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: ShapeTable = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// Get the shape (mino offsets) for a piece kind and rotation state
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let table = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    table[rotation.index()]
}

/// SRS wall-kick data: five (dx, dy) offsets per rotation transition,
/// indexed by [`kick_index`]
pub type KickTable = [[(i8, i8); 5]; 8];

/// Kick table shared by J, L, S, T, Z
const JLSTZ_KICKS: KickTable = [
    // N->E
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // N->W
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->N
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->S
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // S->E
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // S->W
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // W->S
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // W->N
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// I-piece kick table
const I_KICKS: KickTable = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Kick table for a piece kind. O never reaches the table: its rotation is
/// resolved with a bare (0, 0) test in [`try_rotate`].
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Index of the (from, direction) transition in a kick table.
///
/// The 4-state tables are total over all eight transitions, so the lookup
/// never misses.
fn kick_index(from: Rotation, clockwise: bool) -> usize {
    match (from, clockwise) {
        (Rotation::North, true) => 0,  // N->E
        (Rotation::North, false) => 1, // N->W
        (Rotation::East, false) => 2,  // E->N
        (Rotation::East, true) => 3,   // E->S
        (Rotation::South, false) => 4, // S->E
        (Rotation::South, true) => 5,  // S->W
        (Rotation::West, false) => 6,  // W->S
        (Rotation::West, true) => 7,   // W->N
    }
}

/// Try to rotate a piece, resolving wall kicks against the caller-supplied
/// cell-freeness predicate.
///
/// Returns `Some((new_rotation, (dx, dy)))` with the applied kick offset, or
/// `None` if every candidate fails. The O piece tests only the zero offset;
/// since its shape is rotation-invariant and the piece already stands on a
/// legal position, O rotation always succeeds in place.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    clockwise: bool,
    is_free: impl Fn(i8, i8) -> bool,
) -> Option<(Rotation, (i8, i8))> {
    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };
    let new_shape = shape(kind, new_rotation);

    let fits = |ox: i8, oy: i8| new_shape.iter().all(|&(mx, my)| is_free(ox + mx, oy + my));

    if kind == PieceKind::O {
        return fits(x, y).then_some((new_rotation, (0, 0)));
    }

    let kicks = &kick_table(kind)[kick_index(rotation, clockwise)];
    for &(dx, dy) in kicks.iter() {
        if fits(x + dx, y + dy) {
            return Some((new_rotation, (dx, dy)));
        }
    }

    None
}

/// Shape of a freshly spawned piece (spawn orientation)
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    shape(kind, Rotation::North)
}

/// Spawn position re-exported next to the shape helpers
pub const SPAWN: (i8, i8) = SPAWN_POSITION;
