use bytemuck::{Pod, Zeroable};

/// A filled circle, one per vehicle. 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DotInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl DotInstance {
    pub const FLOATS: usize = 4;
}

/// A stroked line, one per lace segment. 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    pub alpha: f32,
}

impl LineInstance {
    pub const FLOATS: usize = 6;
}

/// UI overlays drawn above the simulation (buttons, labels).
/// `kind` is game-defined. 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OverlayInstance {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl OverlayInstance {
    pub const FLOATS: usize = 6;
}

/// Per-frame render output, rebuilt from scratch every tick.
///
/// Each section is bounded by the capacity it was created with; pushes past
/// capacity are dropped so the shared buffer never overflows.
pub struct RenderBuffer {
    pub dots: Vec<DotInstance>,
    pub lines: Vec<LineInstance>,
    pub overlays: Vec<OverlayInstance>,
    max_dots: usize,
    max_lines: usize,
    max_overlays: usize,
}

impl RenderBuffer {
    pub fn with_capacity(max_dots: usize, max_lines: usize, max_overlays: usize) -> Self {
        Self {
            dots: Vec::with_capacity(max_dots),
            lines: Vec::with_capacity(max_lines),
            overlays: Vec::with_capacity(max_overlays),
            max_dots,
            max_lines,
            max_overlays,
        }
    }

    pub fn clear(&mut self) {
        self.dots.clear();
        self.lines.clear();
        self.overlays.clear();
    }

    pub fn push_dot(&mut self, dot: DotInstance) {
        if self.dots.len() < self.max_dots {
            self.dots.push(dot);
        }
    }

    pub fn push_line(&mut self, line: LineInstance) {
        if self.lines.len() < self.max_lines {
            self.lines.push(line);
        }
    }

    pub fn push_overlay(&mut self, overlay: OverlayInstance) {
        if self.overlays.len() < self.max_overlays {
            self.overlays.push(overlay);
        }
    }

    pub fn dot_count(&self) -> u32 {
        self.dots.len() as u32
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn overlay_count(&self) -> u32 {
        self.overlays.len() as u32
    }

    /// Raw pointers for SharedArrayBuffer reads.
    pub fn dots_ptr(&self) -> *const f32 {
        self.dots.as_ptr() as *const f32
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr() as *const f32
    }

    pub fn overlays_ptr(&self) -> *const f32 {
        self.overlays.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::with_capacity(512, 65536, 8)
    }
}
