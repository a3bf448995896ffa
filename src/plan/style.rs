/// Reference to a texture image in the application's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRef {
    /// Catalog identifier of the image.
    pub id: String,
    /// Width covered by one tile of the image.
    pub width: f64,
    /// Height covered by one tile of the image.
    pub height: f64,
    /// Rotation of the image, in radians.
    pub angle: f64,
}

impl TextureRef {
    #[must_use]
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            angle: 0.0,
        }
    }
}

/// What a surface is painted with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// No explicit paint; the renderer's default material applies.
    Default,
    /// A plain RGB color.
    Color(u32),
    /// A tiled texture.
    Textured(TextureRef),
}

/// Baseboard running along the bottom of a wall side.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseboard {
    pub thickness: f64,
    pub height: f64,
    pub color: Option<u32>,
    pub texture: Option<TextureRef>,
}

impl Baseboard {
    #[must_use]
    pub fn new(thickness: f64, height: f64) -> Self {
        Self {
            thickness,
            height,
            color: None,
            texture: None,
        }
    }
}

/// Paint, shininess and baseboard of one side of a wall.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SideFinish {
    pub color: Option<u32>,
    pub texture: Option<TextureRef>,
    pub shininess: f64,
    pub baseboard: Option<Baseboard>,
}

impl SideFinish {
    /// Returns the paint currently applied. A color wins over a texture.
    #[must_use]
    pub fn paint(&self) -> Paint {
        match (&self.color, &self.texture) {
            (Some(color), _) => Paint::Color(*color),
            (None, Some(texture)) => Paint::Textured(texture.clone()),
            (None, None) => Paint::Default,
        }
    }

    /// Applies a paint; a color clears the texture and vice versa.
    pub fn set_paint(&mut self, paint: &Paint) {
        (self.color, self.texture) = split_paint(paint);
    }
}

/// Visibility, paint and shininess of a room's floor or ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFinish {
    pub visible: bool,
    pub color: Option<u32>,
    pub texture: Option<TextureRef>,
    pub shininess: f64,
}

impl Default for SurfaceFinish {
    fn default() -> Self {
        Self {
            visible: true,
            color: None,
            texture: None,
            shininess: 0.0,
        }
    }
}

impl SurfaceFinish {
    /// Returns the paint currently applied. A color wins over a texture.
    #[must_use]
    pub fn paint(&self) -> Paint {
        match (&self.color, &self.texture) {
            (Some(color), _) => Paint::Color(*color),
            (None, Some(texture)) => Paint::Textured(texture.clone()),
            (None, None) => Paint::Default,
        }
    }

    /// Applies a paint; a color clears the texture and vice versa.
    pub fn set_paint(&mut self, paint: &Paint) {
        (self.color, self.texture) = split_paint(paint);
    }
}

fn split_paint(paint: &Paint) -> (Option<u32>, Option<TextureRef>) {
    match paint {
        Paint::Default => (None, None),
        Paint::Color(color) => (Some(*color), None),
        Paint::Textured(texture) => (None, Some(texture.clone())),
    }
}
