mod raster;
pub(crate) use self::raster::Raster;
use crate::consts;
use crate::game::Scene;
use ratatui::{layout::Position, style::Color};

/// A 2D drawing surface measured in canvas units, with `y` growing
/// downwards.  Later drawing covers earlier drawing.
pub(crate) trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// Draw one frame of the game onto `surface`.
///
/// The whole board is cleared first, so calling this repeatedly with the
/// same scene always produces the same picture.
pub(crate) fn render<S: Surface>(surface: &mut S, scene: &Scene) {
    let grid = scene.grid;
    let cell = f64::from(grid.cell_size());
    let extent = grid.extent();
    surface.fill_rect(0.0, 0.0, extent, extent, consts::BACKGROUND_COLOR);

    let segment = cell * consts::SEGMENT_SCALE;
    let mut prev: Option<Position> = None;
    for pos in scene.snake.cells() {
        let center = grid.cell_center(pos);
        surface.fill_circle(center.0, center.1, segment / 2.0, consts::SNAKE_COLOR);
        if let Some(p) = prev.filter(|&p| adjacent(p, pos)) {
            surface.stroke_line(center, grid.cell_center(p), segment, consts::SNAKE_COLOR);
        }
        prev = Some(pos);
    }

    let (hx, hy) = grid.cell_center(scene.snake.head());
    let (dx, dy) = scene.direction.delta();
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    // Perpendicular to the direction of travel
    let (px, py) = (-dy, dx);
    let side = cell * consts::EYE_OFFSET;
    for sign in [-1.0, 1.0] {
        let ahead = cell * consts::EYE_OFFSET;
        surface.fill_circle(
            (sign * px).mul_add(side, dx.mul_add(ahead, hx)),
            (sign * py).mul_add(side, dy.mul_add(ahead, hy)),
            cell * consts::EYE_SCALE,
            consts::EYE_COLOR,
        );
    }
    for sign in [-1.0, 1.0] {
        let ahead = cell * consts::PUPIL_OFFSET;
        surface.fill_circle(
            (sign * px).mul_add(side, dx.mul_add(ahead, hx)),
            (sign * py).mul_add(side, dy.mul_add(ahead, hy)),
            cell * consts::EYE_SCALE / 2.0,
            consts::PUPIL_COLOR,
        );
    }

    if let Some(food) = scene.food {
        let (fx, fy) = grid.cell_center(food);
        surface.fill_circle(fx, fy, cell / 2.0 - 1.0, consts::FOOD_COLOR);
    }
}

/// Are `a` and `b` side by side on the board, not counting wraparound?
/// Segments that straddle an edge of the board are not joined up, as the
/// joining stroke would cut across the entire board.
fn adjacent(a: Position, b: Position) -> bool {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y) == 1
}


#[cfg(test)]
mod tests {
    use super::testing::{DrawOp, RecordingSurface};
    use super::*;
    use crate::game::{Direction, Grid, Snake};
    use pretty_assertions::assert_eq;

    fn scene(body: &[(u16, u16)], food: (u16, u16), direction: Direction) -> Scene {
        let mut cells = body.iter().map(|&(x, y)| Position::new(x, y));
        let mut snake = Snake::new(cells.next().expect("body should not be empty"));
        for p in cells {
            snake.push_head(p);
        }
        Scene {
            grid: Grid::default(),
            snake,
            food: Some(Position::new(food.0, food.1)),
            direction,
        }
    }

    fn circles(ops: &[DrawOp], color: Color) -> Vec<(f64, f64, f64)> {
        ops.iter()
            .filter_map(|op| match *op {
                DrawOp::Circle {
                    cx,
                    cy,
                    radius,
                    color: c,
                } if c == color => Some((cx, cy, radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_segment_heading_east() {
        let mut surface = RecordingSurface::default();
        render(&mut surface, &scene(&[(10, 10)], (15, 15), Direction::East));
        assert_eq!(
            surface.ops,
            vec![
                DrawOp::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 400.0,
                    height: 400.0,
                    color: consts::BACKGROUND_COLOR,
                },
                DrawOp::Circle {
                    cx: 210.0,
                    cy: 210.0,
                    radius: 8.0,
                    color: consts::SNAKE_COLOR,
                },
                DrawOp::Circle {
                    cx: 214.0,
                    cy: 206.0,
                    radius: 3.0,
                    color: consts::EYE_COLOR,
                },
                DrawOp::Circle {
                    cx: 214.0,
                    cy: 214.0,
                    radius: 3.0,
                    color: consts::EYE_COLOR,
                },
                DrawOp::Circle {
                    cx: 215.0,
                    cy: 206.0,
                    radius: 1.5,
                    color: consts::PUPIL_COLOR,
                },
                DrawOp::Circle {
                    cx: 215.0,
                    cy: 214.0,
                    radius: 1.5,
                    color: consts::PUPIL_COLOR,
                },
                DrawOp::Circle {
                    cx: 310.0,
                    cy: 310.0,
                    radius: 9.0,
                    color: consts::FOOD_COLOR,
                },
            ]
        );
    }

    #[test]
    fn eyes_follow_vertical_travel() {
        let mut surface = RecordingSurface::default();
        render(&mut surface, &scene(&[(10, 10)], (15, 15), Direction::North));
        assert_eq!(
            circles(&surface.ops, consts::EYE_COLOR),
            vec![(206.0, 206.0, 3.0), (214.0, 206.0, 3.0)]
        );
        assert_eq!(
            circles(&surface.ops, consts::PUPIL_COLOR),
            vec![(206.0, 205.0, 1.5), (214.0, 205.0, 1.5)]
        );
    }

    #[test]
    fn segments_are_joined() {
        // Built tail-first: the head ends up at (5, 3).
        let mut surface = RecordingSurface::default();
        render(
            &mut surface,
            &scene(&[(3, 3), (4, 3), (5, 3)], (0, 0), Direction::East),
        );
        let body = circles(&surface.ops, consts::SNAKE_COLOR);
        assert_eq!(
            body,
            vec![(110.0, 70.0, 8.0), (90.0, 70.0, 8.0), (70.0, 70.0, 8.0)]
        );
        let lines = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                DrawOp::Line {
                    from: (90.0, 70.0),
                    to: (110.0, 70.0),
                    width: 16.0,
                    color: consts::SNAKE_COLOR,
                },
                DrawOp::Line {
                    from: (70.0, 70.0),
                    to: (90.0, 70.0),
                    width: 16.0,
                    color: consts::SNAKE_COLOR,
                },
            ]
        );
    }

    #[test]
    fn no_stroke_across_wraparound() {
        let mut surface = RecordingSurface::default();
        render(
            &mut surface,
            &scene(&[(18, 7), (19, 7), (0, 7)], (0, 0), Direction::East),
        );
        let lines = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        assert_eq!(lines, 1);
        assert_eq!(circles(&surface.ops, consts::SNAKE_COLOR).len(), 3);
    }

    #[test]
    fn background_first_food_last() {
        let mut surface = RecordingSurface::default();
        render(
            &mut surface,
            &scene(&[(3, 3), (3, 4), (3, 5)], (8, 1), Direction::South),
        );
        assert!(matches!(
            surface.ops.first(),
            Some(DrawOp::Rect {
                color: consts::BACKGROUND_COLOR,
                ..
            })
        ));
        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::Circle {
                cx: 170.0,
                cy: 30.0,
                radius: 9.0,
                color: consts::FOOD_COLOR,
            })
        );
    }

    #[test]
    fn idempotent() {
        let s = scene(&[(3, 3), (4, 3)], (8, 1), Direction::East);
        let mut first = RecordingSurface::default();
        render(&mut first, &s);
        let mut second = RecordingSurface::default();
        render(&mut second, &s);
        render(&mut second, &s);
        assert_eq!(second.ops.len(), first.ops.len() * 2);
        assert_eq!(second.ops[first.ops.len()..], first.ops[..]);
    }

    #[test]
    fn no_food_on_full_board() {
        let mut s = scene(&[(1, 0), (0, 0)], (0, 0), Direction::West);
        s.food = None;
        let mut surface = RecordingSurface::default();
        render(&mut surface, &s);
        assert!(circles(&surface.ops, consts::FOOD_COLOR).is_empty());
        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::Circle {
                cx: 5.0,
                cy: 6.0,
                radius: 1.5,
                color: consts::PUPIL_COLOR,
            })
        );
    }
}
