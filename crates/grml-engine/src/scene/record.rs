use grml_script::Graphics;

use super::{DrawCmd, DrawList};

impl Graphics for DrawList {
    fn axes(
        &mut self,
        x_tick: f64,
        y_tick: f64,
        x_org: f64,
        y_org: f64,
        major_x: i32,
        major_y: i32,
        tick_size: f64,
    ) {
        self.push(DrawCmd::Axes { x_tick, y_tick, x_org, y_org, major_x, major_y, tick_size });
    }

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
    ) {
        self.push(DrawCmd::Axes3d {
            x_tick,
            y_tick,
            z_tick,
            x_org,
            y_org,
            z_org,
            major_x,
            major_y,
            major_z,
            tick_size,
        });
    }

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
    ) {
        self.push(DrawCmd::CellArray {
            xmin,
            xmax,
            ymin,
            ymax,
            dimx,
            dimy,
            scol,
            srow,
            ncol,
            nrow,
            color: color.to_vec(),
        });
    }

    fn colormap(&mut self) {
        self.push(DrawCmd::Colormap);
    }

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
    ) {
        self.push(DrawCmd::Contour {
            nx,
            ny,
            nh,
            px: px.to_vec(),
            py: py.to_vec(),
            h: h.to_vec(),
            pz: pz.to_vec(),
            major_h,
        });
    }

    fn draw_arc(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32) {
        self.push(DrawCmd::DrawArc { xmin, xmax, ymin, ymax, a1, a2 });
    }

    fn draw_arrow(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(DrawCmd::DrawArrow { x1, y1, x2, y2 });
    }

    fn draw_image(
        &mut self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: i32,
        height: i32,
        data: &[i32],
    ) {
        self.push(DrawCmd::DrawImage { xmin, xmax, ymin, ymax, width, height, data: data.to_vec() });
    }

    fn draw_rect(&mut self, left: f64, right: f64, bottom: f64, top: f64) {
        self.push(DrawCmd::DrawRect { left, right, bottom, top });
    }

    fn fill_arc(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32) {
        self.push(DrawCmd::FillArc { xmin, xmax, ymin, ymax, a1, a2 });
    }

    fn fill_area(&mut self, n: i32, x: &[f64], y: &[f64]) {
        self.push(DrawCmd::FillArea { n, x: x.to_vec(), y: y.to_vec() });
    }

    fn fill_rect(&mut self, left: f64, right: f64, bottom: f64, top: f64) {
        self.push(DrawCmd::FillRect { left, right, bottom, top });
    }

    fn grid(&mut self, x_tick: f64, y_tick: f64, x_org: f64, y_org: f64, major_x: i32, major_y: i32) {
        self.push(DrawCmd::Grid { x_tick, y_tick, x_org, y_org, major_x, major_y });
    }

    fn herrorbars(&mut self, n: i32, x: &[f64], y: &[f64], e1: &[f64], e2: &[f64]) {
        self.push(DrawCmd::HErrorBars {
            n,
            x: x.to_vec(),
            y: y.to_vec(),
            e1: e1.to_vec(),
            e2: e2.to_vec(),
        });
    }

    fn mathtex(&mut self, x: f64, y: f64, formula: &str) {
        self.push(DrawCmd::MathTex { x, y, formula: formula.to_owned() });
    }

    fn polyline(&mut self, n: i32, x: &[f64], y: &[f64]) {
        self.push(DrawCmd::Polyline { n, x: x.to_vec(), y: y.to_vec() });
    }

    fn polymarker(&mut self, n: i32, x: &[f64], y: &[f64]) {
        self.push(DrawCmd::Polymarker { n, x: x.to_vec(), y: y.to_vec() });
    }

    fn set_arrow_style(&mut self, style: i32) {
        self.push(DrawCmd::SetArrowStyle(style));
    }

    fn set_char_height(&mut self, height: f64) {
        self.push(DrawCmd::SetCharHeight(height));
    }

    fn set_char_up(&mut self, ux: f64, uy: f64) {
        self.push(DrawCmd::SetCharUp { ux, uy });
    }

    fn set_colormap(&mut self, index: i32) {
        self.push(DrawCmd::SetColormap(index));
    }

    fn set_fill_color_ind(&mut self, color: i32) {
        self.push(DrawCmd::SetFillColorInd(color));
    }

    fn set_fill_ind(&mut self, index: i32) {
        self.push(DrawCmd::SetFillInd(index));
    }

    fn set_fill_int_style(&mut self, style: i32) {
        self.push(DrawCmd::SetFillIntStyle(style));
    }

    fn set_fill_style(&mut self, index: i32) {
        self.push(DrawCmd::SetFillStyle(index));
    }

    fn set_line_color_ind(&mut self, color: i32) {
        self.push(DrawCmd::SetLineColorInd(color));
    }

    fn set_line_ind(&mut self, index: i32) {
        self.push(DrawCmd::SetLineInd(index));
    }

    fn set_line_type(&mut self, line_type: i32) {
        self.push(DrawCmd::SetLineType(line_type));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCmd::SetLineWidth(width));
    }

    fn set_marker_color_ind(&mut self, color: i32) {
        self.push(DrawCmd::SetMarkerColorInd(color));
    }

    fn set_marker_ind(&mut self, index: i32) {
        self.push(DrawCmd::SetMarkerInd(index));
    }

    fn set_marker_size(&mut self, size: f64) {
        self.push(DrawCmd::SetMarkerSize(size));
    }

    fn set_marker_type(&mut self, marker_type: i32) {
        self.push(DrawCmd::SetMarkerType(marker_type));
    }

    fn set_scale(&mut self, options: i32) {
        self.push(DrawCmd::SetScale(options));
    }

    fn set_space(&mut self, zmin: f64, zmax: f64, rotation: i32, tilt: i32) {
        self.push(DrawCmd::SetSpace { zmin, zmax, rotation, tilt });
    }

    fn set_text_align(&mut self, horizontal: i32, vertical: i32) {
        self.push(DrawCmd::SetTextAlign { horizontal, vertical });
    }

    fn set_text_color_ind(&mut self, color: i32) {
        self.push(DrawCmd::SetTextColorInd(color));
    }

    fn set_text_font_prec(&mut self, font: i32, precision: i32) {
        self.push(DrawCmd::SetTextFontPrec { font, precision });
    }

    fn set_text_ind(&mut self, index: i32) {
        self.push(DrawCmd::SetTextInd(index));
    }

    fn set_text_path(&mut self, path: i32) {
        self.push(DrawCmd::SetTextPath(path));
    }

    fn set_viewport(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.push(DrawCmd::SetViewport { xmin, xmax, ymin, ymax });
    }

    fn set_window(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.push(DrawCmd::SetWindow { xmin, xmax, ymin, ymax });
    }

    fn spline(&mut self, n: i32, px: &[f64], py: &[f64], m: i32, method: i32) {
        self.push(DrawCmd::Spline { n, px: px.to_vec(), py: py.to_vec(), m, method });
    }

    fn surface(&mut self, nx: i32, ny: i32, px: &[f64], py: &[f64], pz: &[f64], option: i32) {
        self.push(DrawCmd::Surface {
            nx,
            ny,
            px: px.to_vec(),
            py: py.to_vec(),
            pz: pz.to_vec(),
            option,
        });
    }

    fn text(&mut self, x: f64, y: f64, string: &str) {
        self.push(DrawCmd::Text { x, y, string: string.to_owned() });
    }

    fn textext(&mut self, x: f64, y: f64, string: &str) {
        self.push(DrawCmd::TextExt { x, y, string: string.to_owned() });
    }

    fn titles3d(&mut self, x_title: &str, y_title: &str, z_title: &str) {
        self.push(DrawCmd::Titles3d {
            x_title: x_title.to_owned(),
            y_title: y_title.to_owned(),
            z_title: z_title.to_owned(),
        });
    }

    fn verrorbars(&mut self, n: i32, x: &[f64], y: &[f64], e1: &[f64], e2: &[f64]) {
        self.push(DrawCmd::VErrorBars {
            n,
            x: x.to_vec(),
            y: y.to_vec(),
            e1: e1.to_vec(),
            e2: e2.to_vec(),
        });
    }
}
