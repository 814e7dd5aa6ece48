use eframe::egui;
use snake3d_common::games::snake::{Cell, GameSnapshot, Grid};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x11, 0x18, 0x25);
const BOARD: egui::Color32 = egui::Color32::from_rgb(0x18, 0x21, 0x32);
const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x3b, 0x52);
const SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(0x42, 0xd3, 0x92);
const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(0x2a, 0xb5, 0x7a);
const FOOD: egui::Color32 = egui::Color32::from_rgb(0xff, 0x6b, 0x6b);
const FLASH: egui::Color32 = egui::Color32::from_rgb(0xff, 0xd1, 0x66);

const SNAKE_CUBE: f32 = 0.9;
const FOOD_CUBE: f32 = 0.75;

type Vec3 = [f32; 3];

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Pinhole camera looking at the board center from above and in front.
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, fov_y_degrees: f32) -> Self {
        let forward = normalize(sub(target, position));
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);
        let focal = 1.0 / (fov_y_degrees.to_radians() / 2.0).tan();
        Self {
            position,
            forward,
            right,
            up,
            focal,
        }
    }

    pub fn for_board() -> Self {
        Self::new([0.0, 22.0, 20.0], [0.0, 0.0, 0.0], 48.0)
    }

    /// Maps a world point into `viewport`, or `None` when it is behind the camera.
    pub fn project(&self, point: Vec3, viewport: egui::Rect) -> Option<egui::Pos2> {
        let d = sub(point, self.position);
        let depth = dot(d, self.forward);
        if depth <= 0.1 {
            return None;
        }

        let half_height = viewport.height() / 2.0;
        let x = dot(d, self.right) * self.focal / depth;
        let y = dot(d, self.up) * self.focal / depth;
        Some(egui::pos2(
            viewport.center().x + x * half_height,
            viewport.center().y - y * half_height,
        ))
    }

    fn polygon(&self, corners: &[Vec3], viewport: egui::Rect) -> Option<Vec<egui::Pos2>> {
        corners.iter().map(|&c| self.project(c, viewport)).collect()
    }
}

pub struct BoardView {
    camera: Camera,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            camera: Camera::for_board(),
        }
    }

    pub fn render(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot, flash: f32) {
        let size = ui.available_size();
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        let grid = snapshot.grid();
        self.render_board(&painter, rect, &grid, flash);

        let mut cubes: Vec<(Cell, f32, egui::Color32)> = Vec::with_capacity(snapshot.snake.len() + 1);
        for (index, cell) in snapshot.snake.iter().enumerate() {
            let color = if index == 0 { SNAKE_HEAD } else { SNAKE_BODY };
            cubes.push((*cell, SNAKE_CUBE, color));
        }
        if let Some(food) = snapshot.food {
            cubes.push((food, FOOD_CUBE, FOOD));
        }

        // Far rows first so nearer cubes overlap them.
        cubes.sort_by_key(|(cell, _, _)| cell.y);
        for (cell, size, color) in cubes {
            let (x, z) = grid.to_render_space(cell);
            self.render_cube(&painter, rect, [x, 0.0, z], size, color);
        }
    }

    fn render_board(&self, painter: &egui::Painter, rect: egui::Rect, grid: &Grid, flash: f32) {
        let half = grid.tile_count() as f32 / 2.0;
        let edge = half + 1.0;
        let board = [
            [-edge, -0.5, -edge],
            [edge, -0.5, -edge],
            [edge, -0.5, edge],
            [-edge, -0.5, edge],
        ];
        let stroke = if flash > 0.0 {
            egui::Stroke::new(2.0 + 4.0 * flash, FLASH.gamma_multiply(flash))
        } else {
            egui::Stroke::NONE
        };
        if let Some(points) = self.camera.polygon(&board, rect) {
            painter.add(egui::Shape::convex_polygon(points, BOARD, stroke));
        }

        let line = egui::Stroke::new(1.0, GRID_LINE);
        for i in 0..=grid.tile_count() {
            let offset = i as f32 - half;
            let lines = [
                ([offset, -0.49, -half], [offset, -0.49, half]),
                ([-half, -0.49, offset], [half, -0.49, offset]),
            ];
            for (from, to) in lines {
                if let (Some(a), Some(b)) = (
                    self.camera.project(from, rect),
                    self.camera.project(to, rect),
                ) {
                    painter.line_segment([a, b], line);
                }
            }
        }
    }

    fn render_cube(&self, painter: &egui::Painter, rect: egui::Rect, center: Vec3, size: f32, color: egui::Color32) {
        let s = size / 2.0;
        let [x, y, z] = center;
        let front = [
            [x - s, y - s, z + s],
            [x + s, y - s, z + s],
            [x + s, y + s, z + s],
            [x - s, y + s, z + s],
        ];
        let top = [
            [x - s, y + s, z - s],
            [x + s, y + s, z - s],
            [x + s, y + s, z + s],
            [x - s, y + s, z + s],
        ];

        if let Some(points) = self.camera.polygon(&front, rect) {
            painter.add(egui::Shape::convex_polygon(points, color.gamma_multiply(0.7), egui::Stroke::NONE));
        }
        if let Some(points) = self.camera.polygon(&top, rect) {
            painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
        }
    }
}
