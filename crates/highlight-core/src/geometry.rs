// File: crates/highlight-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and a backend-neutral path sink.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn is_empty(&self) -> bool { !(self.left < self.right && self.top < self.bottom) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Receiver of path construction calls. Implemented by recorders and drawing backends.
pub trait PathSink {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Recorded path; replayable into any `PathSink`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    pub fn new() -> Self { Self::default() }

    /// Vertices in emission order (every move-to and line-to point).
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::Close => None,
            })
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(p) => sink.move_to(p.x, p.y),
                PathCommand::LineTo(p) => sink.line_to(p.x, p.y),
                PathCommand::Close => sink.close(),
            }
        }
    }

    /// Axis-aligned bounds of all vertices; `None` for an empty outline.
    pub fn bounds(&self) -> Option<RectF> {
        let mut it = self.vertices().into_iter();
        let first = it.next()?;
        let init = RectF::from_ltrb(first.x, first.y, first.x, first.y);
        Some(it.fold(init, |r, p| RectF {
            left: r.left.min(p.x),
            top: r.top.min(p.y),
            right: r.right.max(p.x),
            bottom: r.bottom.max(p.y),
        }))
    }
}

impl PathSink for Outline {
    fn move_to(&mut self, x: f32, y: f32) { self.commands.push(PathCommand::MoveTo(Point::new(x, y))); }
    fn line_to(&mut self, x: f32, y: f32) { self.commands.push(PathCommand::LineTo(Point::new(x, y))); }
    fn close(&mut self) { self.commands.push(PathCommand::Close); }
}
