use web_sys::CanvasRenderingContext2d;

/// Drawing primitives the board renderer needs.
///
/// Implemented for the browser 2D context; tests record calls instead.
pub trait DrawSurface {
    fn clear(&self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
    /// Filled circle with an outline.
    fn stone(&self, center: (f64, f64), radius: f64, fill: &str, outline: &str);
}

impl DrawSurface for CanvasRenderingContext2d {
    fn clear(&self, x: f64, y: f64, width: f64, height: f64) {
        self.clear_rect(x, y, width, height);
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }

    fn stone(&self, center: (f64, f64), radius: f64, fill: &str, outline: &str) {
        self.begin_path();
        if let Err(err) = self.arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU) {
            log::warn!("failed to trace stone at {center:?}: {err:?}");
            return;
        }
        self.set_fill_style_str(fill);
        self.fill();
        self.set_stroke_style_str(outline);
        self.stroke();
    }
}
