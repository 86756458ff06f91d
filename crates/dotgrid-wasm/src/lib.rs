use dotgrid_core::engine::DotGridEngine;
use dotgrid_core::GridConfig;
use glam::Vec4;
use wasm_bindgen::prelude::*;

/// Host-visible dot: 32 bytes, read straight out of wasm memory and
/// drawn as-is (center position, scale, diameter, RGBA).
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct RenderDot {
    position: [f32; 2], //  8 bytes
    scale: f32,         //  4 bytes
    size: f32,          //  4 bytes
    color: [f32; 4],    // 16 bytes
}

const ZERO_DOT: RenderDot = RenderDot {
    position: [0.0; 2],
    scale: 0.0,
    size: 0.0,
    color: [0.0; 4],
};

#[wasm_bindgen]
pub struct DotGrid {
    engine: DotGridEngine,
    render_buffer: Vec<RenderDot>,
}

#[wasm_bindgen]
impl DotGrid {
    /// Mount the grid for a container of the given pixel size, with
    /// default tunables. Freeing the handle is the full teardown.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> DotGrid {
        let mut grid = DotGrid {
            engine: DotGridEngine::new(GridConfig::default()),
            render_buffer: Vec::new(),
        };
        grid.engine.resize(width, height);

        web_sys::console::log_1(
            &format!("DotGrid mounted: {} dots", grid.engine.particles.count).into(),
        );

        grid.write_render_output();
        grid
    }

    /// Replace the full tunable set and rebuild the lattice (gap and
    /// colors bake into the particle set). Colors are RGBA quadruples.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn set_config(
        &mut self,
        width: f32,
        height: f32,
        dot_size: f32,
        gap: f32,
        base_color: &[f32],
        active_color: &[f32],
        proximity: f32,
        speed_trigger: f32,
        shock_radius: f32,
        shock_strength: f32,
        max_speed: f32,
        return_duration: f32,
    ) {
        if let (Ok(base), Ok(active)) = (base_color.try_into(), active_color.try_into()) {
            self.engine.config = GridConfig {
                dot_size,
                gap,
                base_color: Vec4::from_array(base),
                active_color: Vec4::from_array(active),
                proximity,
                speed_trigger,
                shock_radius,
                shock_strength,
                max_speed,
                return_duration,
            };
            self.engine.resize(width, height);
            self.write_render_output();
        }
    }

    /// Rebuild the lattice for a new container size, discarding the
    /// previous dots and any in-flight animation.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
        self.write_render_output();
    }

    /// Forward a container-relative pointer-move event.
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.engine.pointer_move(x, y);
    }

    /// Forward a container-relative click/tap.
    #[wasm_bindgen]
    pub fn click(&mut self, x: f32, y: f32) {
        self.engine.click(x, y);
    }

    /// Advance the animation by `dt` time units and refresh the render
    /// buffer. Returns the elapsed wall-clock milliseconds so the host
    /// can budget its frame.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        self.engine.step(dt);
        self.write_render_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn get_render_buffer_ptr(&self) -> *const f32 {
        self.render_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_render_buffer_byte_length(&self) -> usize {
        self.render_buffer.len() * std::mem::size_of::<RenderDot>()
    }

    #[wasm_bindgen]
    pub fn dot_count(&self) -> usize {
        self.engine.particles.count
    }

    /// Drop all dots and pointer state without freeing the handle.
    /// Idempotent; a later `resize` repopulates the grid.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.engine.clear();
        self.render_buffer.clear();
    }
}

impl DotGrid {
    /// Pure projection of engine state into the host buffer: rest
    /// position plus animated offset, animated scale and color.
    fn write_render_output(&mut self) {
        let count = self.engine.particles.count;
        self.render_buffer.resize(count, ZERO_DOT);
        let size = self.engine.config.dot_size;
        for i in 0..count {
            let p = &self.engine.particles;
            let pos = p.original[i] + p.offset[i];
            self.render_buffer[i] = RenderDot {
                position: [pos.x, pos.y],
                scale: p.scale[i],
                size,
                color: p.color[i].to_array(),
            };
        }
    }
}
