//! Drawing primitive contract.
//!
//! Implement [`Graphics`] for a backend (screen, file writer, recorder) and
//! hand it to the importer. Each method corresponds to one script element;
//! the element name is the method name with underscores removed
//! (`set_line_width` ↔ `<setlinewidth .../>`).
//!
//! Counts such as `n` are passed through as written in the script. List
//! slices carry however many values the script supplied, which may differ
//! from the count; backends must not index past the slice.

/// Drawing primitives driven by an imported script.
#[allow(clippy::too_many_arguments)]
pub trait Graphics {
    fn axes(
        &mut self,
        x_tick: f64,
        y_tick: f64,
        x_org: f64,
        y_org: f64,
        major_x: i32,
        major_y: i32,
        tick_size: f64,
    );

    fn axes3d(
        &mut self,
        x_tick: f64,
        y_tick: f64,
        z_tick: f64,
        x_org: f64,
        y_org: f64,
        z_org: f64,
        major_x: i32,
        major_y: i32,
        major_z: i32,
        tick_size: f64,
    );

    /// Color-index cell raster. `color` is row-major, `dimx` by `dimy`.
    fn cell_array(
        &mut self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        dimx: i32,
        dimy: i32,
        scol: i32,
        srow: i32,
        ncol: i32,
        nrow: i32,
        color: &[i32],
    );

    /// Applies the current colormap.
    fn colormap(&mut self);

    fn contour(
        &mut self,
        nx: i32,
        ny: i32,
        nh: i32,
        px: &[f64],
        py: &[f64],
        h: &[f64],
        pz: &[f64],
        major_h: i32,
    );

    /// Arc outline inside the box; angles in degrees.
    fn draw_arc(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32);

    fn draw_arrow(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// RGBA image blit. `data` holds `width * height` packed pixels.
    fn draw_image(
        &mut self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: i32,
        height: i32,
        data: &[i32],
    );

    fn draw_rect(&mut self, left: f64, right: f64, bottom: f64, top: f64);

    fn fill_arc(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32);

    fn fill_area(&mut self, n: i32, x: &[f64], y: &[f64]);

    fn fill_rect(&mut self, left: f64, right: f64, bottom: f64, top: f64);

    fn grid(&mut self, x_tick: f64, y_tick: f64, x_org: f64, y_org: f64, major_x: i32, major_y: i32);

    fn herrorbars(&mut self, n: i32, x: &[f64], y: &[f64], e1: &[f64], e2: &[f64]);

    fn mathtex(&mut self, x: f64, y: f64, formula: &str);

    fn polyline(&mut self, n: i32, x: &[f64], y: &[f64]);

    fn polymarker(&mut self, n: i32, x: &[f64], y: &[f64]);

    fn set_arrow_style(&mut self, style: i32);

    fn set_char_height(&mut self, height: f64);

    fn set_char_up(&mut self, ux: f64, uy: f64);

    fn set_colormap(&mut self, index: i32);

    fn set_fill_color_ind(&mut self, color: i32);

    fn set_fill_ind(&mut self, index: i32);

    fn set_fill_int_style(&mut self, style: i32);

    fn set_fill_style(&mut self, index: i32);

    fn set_line_color_ind(&mut self, color: i32);

    fn set_line_ind(&mut self, index: i32);

    fn set_line_type(&mut self, line_type: i32);

    fn set_line_width(&mut self, width: f64);

    fn set_marker_color_ind(&mut self, color: i32);

    fn set_marker_ind(&mut self, index: i32);

    fn set_marker_size(&mut self, size: f64);

    fn set_marker_type(&mut self, marker_type: i32);

    /// Axis scale flags (log / flip), bitwise.
    fn set_scale(&mut self, options: i32);

    fn set_space(&mut self, zmin: f64, zmax: f64, rotation: i32, tilt: i32);

    fn set_text_align(&mut self, horizontal: i32, vertical: i32);

    fn set_text_color_ind(&mut self, color: i32);

    fn set_text_font_prec(&mut self, font: i32, precision: i32);

    fn set_text_ind(&mut self, index: i32);

    fn set_text_path(&mut self, path: i32);

    fn set_viewport(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64);

    fn set_window(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64);

    fn spline(&mut self, n: i32, px: &[f64], py: &[f64], m: i32, method: i32);

    fn surface(&mut self, nx: i32, ny: i32, px: &[f64], py: &[f64], pz: &[f64], option: i32);

    fn text(&mut self, x: f64, y: f64, string: &str);

    /// Text with extended formatting (superscripts, symbols).
    fn textext(&mut self, x: f64, y: f64, string: &str);

    fn titles3d(&mut self, x_title: &str, y_title: &str, z_title: &str);

    fn verrorbars(&mut self, n: i32, x: &[f64], y: &[f64], e1: &[f64], e2: &[f64]);
}
