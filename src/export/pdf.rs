use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// mm → pt
const MM: f32 = 2.834_646;

/// Page content of the daily report.
pub struct ReportPage<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub headers: [&'a str; 2],
    pub rows: &'a [[String; 2]],
    pub empty_message: &'a str,
    pub summary: &'a [String],
    pub footer: &'a str,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    subtitle_font_size: f32,
    title_font_size: f32,
    footer_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ids assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4
            page_w: 210.0 * MM,
            page_h: 297.0 * MM,
            row_h: 10.0 * MM,

            next_id,
            font_id,
            bold_font_id,

            font_size: 12.0,
            subtitle_font_size: 14.0,
            title_font_size: 22.0,
            footer_font_size: 10.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), self.font_id);
            fonts.pair(Name(b"F2"), self.bold_font_id);
        }
        drop(page);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Top-down y in mm → PDF y in pt.
    fn y_from_top(&self, mm: f32) -> f32 {
        self.page_h - mm * MM
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Rough Helvetica width: half the font size per glyph.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    fn draw_centered(&self, content: &mut Content, y: f32, size: f32, bold: bool, text: &str) {
        let x = (self.page_w - Self::text_width(text, size)) / 2.0;
        self.draw_text(content, x, y, size, bold, text);
    }

    fn draw_divider(&self, content: &mut Content, y: f32) {
        content.save_state();
        content.set_line_width(0.5 * MM);
        content.move_to(20.0 * MM, y);
        content.line_to(190.0 * MM, y);
        content.stroke();
        content.restore_state();
    }

    fn draw_page_header(&self, content: &mut Content, page: &ReportPage) {
        content.save_state();
        content.set_fill_rgb(0.16, 0.16, 0.16);
        self.draw_centered(
            content,
            self.y_from_top(20.0),
            self.title_font_size,
            true,
            page.title,
        );
        self.draw_centered(
            content,
            self.y_from_top(30.0),
            self.subtitle_font_size,
            false,
            page.subtitle,
        );
        content.restore_state();

        self.draw_divider(content, self.y_from_top(35.0));
    }

    fn draw_footer(&self, content: &mut Content, footer: &str, page_no: usize) {
        content.save_state();
        content.set_fill_rgb(0.59, 0.59, 0.59);
        self.draw_centered(
            content,
            self.y_from_top(280.0),
            self.footer_font_size,
            false,
            footer,
        );
        let pg = format!("Page {}", page_no);
        self.draw_text(
            content,
            self.page_w - 40.0 * MM,
            self.y_from_top(287.0),
            self.footer_font_size,
            false,
            &pg,
        );
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, cells: [&str; 2], bold: bool) {
        self.draw_text(content, 30.0 * MM, y, self.font_size, bold, cells[0]);
        self.draw_text(content, 150.0 * MM, y, self.font_size, bold, cells[1]);
    }

    /// Daily report: centered title and date, divider, a two-column
    /// table (repeated header on each page), summary lines, footer.
    pub fn write_report(&mut self, page: &ReportPage) {
        let first_row_y = self.y_from_top(50.0);
        let last_row_y = self.y_from_top(265.0);

        let mut page_no = 1;
        let mut content = self.new_page();
        self.draw_page_header(&mut content, page);

        let mut y = first_row_y;

        if page.rows.is_empty() {
            self.draw_text(
                &mut content,
                20.0 * MM,
                y,
                self.font_size,
                false,
                page.empty_message,
            );
            y -= self.row_h;
        } else {
            self.draw_row(&mut content, y, page.headers, true);
            y -= self.row_h;

            for row in page.rows {
                if y < last_row_y {
                    self.draw_footer(&mut content, page.footer, page_no);
                    self.finalize_page(content);

                    page_no += 1;
                    content = self.new_page();
                    self.draw_page_header(&mut content, page);
                    y = first_row_y;
                    self.draw_row(&mut content, y, page.headers, true);
                    y -= self.row_h;
                }

                self.draw_row(&mut content, y, [row[0].as_str(), row[1].as_str()], false);
                y -= self.row_h;
            }
        }

        // summary below the table, on a fresh page if it does not fit
        if !page.summary.is_empty() {
            let needed = self.row_h * (page.summary.len() as f32 + 1.0);
            if y - needed < last_row_y {
                self.draw_footer(&mut content, page.footer, page_no);
                self.finalize_page(content);

                page_no += 1;
                content = self.new_page();
                self.draw_page_header(&mut content, page);
                y = first_row_y;
            }

            y -= self.row_h / 2.0;
            for line in page.summary {
                self.draw_text(&mut content, 30.0 * MM, y, self.font_size, false, line);
                y -= self.row_h;
            }
        }

        self.draw_footer(&mut content, page.footer, page_no);
        self.finalize_page(content);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>(rows: &'a [[String; 2]], summary: &'a [String]) -> ReportPage<'a> {
        ReportPage {
            title: "Time Report",
            subtitle: "Date: 05/03/2024",
            headers: ["Type", "Time"],
            rows,
            empty_message: "No punches recorded for today.",
            summary,
            footer: "footer",
        }
    }

    #[test]
    fn empty_report_is_a_single_page() {
        let mut pdf = PdfManager::new();
        pdf.write_report(&page(&[], &[]));
        assert_eq!(pdf.page_count(), 1);

        let bytes = pdf.finish();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_tables_spill_onto_more_pages() {
        let rows: Vec<[String; 2]> = (0..60)
            .map(|i| ["Extra Entry".to_string(), format!("{:02}:00", i % 24)])
            .collect();

        let mut pdf = PdfManager::new();
        pdf.write_report(&page(&rows, &[]));
        assert!(pdf.page_count() > 1);
    }
}
