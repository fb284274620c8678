use super::*;

/// Places vertices uniformly at random on a square canvas.
///
/// Every coordinate is drawn from `0..canvas - vertex_size`, so that a vertex drawn as a square of
/// side `vertex_size` at its position lies completely on the canvas.
#[derive(Debug, Copy, Clone)]
pub struct RandomLayout {
    canvas: u32,
    vertex_size: u32,
}

impl Default for RandomLayout {
    fn default() -> Self {
        Self {
            canvas: 640,
            vertex_size: 10,
        }
    }
}

impl RandomLayout {
    /// Shorthand for default: a `640 x 640` canvas with vertices of size `10`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the side length of the canvas
    pub fn canvas(mut self, canvas: u32) -> Self {
        self.canvas = canvas;
        self
    }

    /// Sets the side length of a drawn vertex
    pub fn vertex_size(mut self, vertex_size: u32) -> Self {
        self.vertex_size = vertex_size;
        self
    }

    /// Draws a single random position
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Position {
        let bound = self.canvas.saturating_sub(self.vertex_size).clamp(1, i32::MAX as u32) as i32;
        Position::new(rng.random_range(0..bound), rng.random_range(0..bound))
    }

    /// Assigns a random position to every vertex that has none yet and returns how many vertices
    /// were placed
    pub fn place<R: Rng>(&self, graph: &mut AdjMatrix, rng: &mut R) -> Result<NumNodes> {
        let mut placed = 0;
        for u in graph.vertices() {
            if graph.vertex(u)?.position().is_none() {
                graph.set_position(u, self.sample(rng))?;
                placed += 1;
            }
        }
        Ok(placed)
    }

    /// Assigns a new random position to every vertex
    pub fn randomize<R: Rng>(&self, graph: &mut AdjMatrix, rng: &mut R) -> Result<()> {
        for u in graph.vertices() {
            graph.set_position(u, self.sample(rng))?;
        }
        Ok(())
    }
}
