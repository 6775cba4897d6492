//! Geração de PDF dos relatórios
//!
//! Renderiza uma tabela paginada em A4 com pdf-writer, sem dependência
//! de browser. O documento é montado em memória e devolvido como bytes
//! para a resposta HTTP.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 20.0;
const FONT_SIZE: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 14.0;

pub struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for ReportPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn text(&self, content: &mut Content, x: f32, y: f32, size: f32, value: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(value.as_bytes()));
        content.end_text();
    }

    fn cell_border(&self, content: &mut Content, x: f32, y: f32, w: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, ROW_H);
        content.stroke();
        content.restore_state();
    }

    fn row(&self, content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
        let mut x = MARGIN;
        for (i, cell) in cells.iter().enumerate() {
            self.text(content, x + 4.0, y + 5.0, size, cell);
            self.cell_border(content, x, y, widths[i]);
            x += widths[i];
        }
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(MARGIN, y, width, ROW_H);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Larguras proporcionais ao conteúdo, escaladas à área útil da página
    fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len() as f32 * 6.2);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let usable = PAGE_W - 2.0 * MARGIN;
        if total > usable {
            let scale = usable / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Desenha a tabela completa, quebrando em páginas quando necessário
    pub fn write_table(&mut self, title: &str, headers: &[String], rows: &[Vec<String>]) {
        let widths = Self::column_widths(headers, rows);
        let table_width: f32 = widths.iter().sum();

        let mut remaining = rows;
        let mut page_number = 1;

        loop {
            let page_id = self.fresh_ref();
            let content_id = self.fresh_ref();
            self.page_refs.push(page_id);

            {
                let mut page = self.pdf.page(page_id);
                page.parent(self.pages_id)
                    .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                    .contents(content_id);
                page.resources().fonts().pair(Name(b"F1"), self.font_id);
            }

            let mut content = Content::new();

            self.text(
                &mut content,
                MARGIN,
                PAGE_H - MARGIN + 15.0,
                TITLE_FONT_SIZE,
                title,
            );
            self.text(
                &mut content,
                PAGE_W - MARGIN - 60.0,
                MARGIN - 35.0,
                FONT_SIZE,
                &format!("Página {}", page_number),
            );

            let mut y = PAGE_H - MARGIN - 30.0;

            self.fill_band(&mut content, y, table_width, (0.85, 0.87, 0.90));
            self.row(&mut content, y, &widths, headers, HEADER_FONT_SIZE);
            y -= ROW_H;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_width, (0.96, 0.96, 0.96));
                }
                self.row(&mut content, y, &widths, row, FONT_SIZE);
                y -= ROW_H;
                consumed += 1;
            }

            self.pdf.stream(content_id, &content.finish());

            remaining = &remaining[consumed..];
            if remaining.is_empty() {
                break;
            }
            page_number += 1;
        }
    }

    /// Finaliza o documento e devolve os bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        self.pdf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gera_pdf_com_cabecalho_valido() {
        let mut pdf = ReportPdf::new();
        pdf.write_table(
            "Relatório de Clientes",
            &["Nome".to_string(), "Telefone".to_string()],
            &[vec!["Maria".to_string(), "11 99999-0000".to_string()]],
        );
        let bytes = pdf.finish();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn tabela_vazia_gera_uma_pagina_so_com_header() {
        let mut pdf = ReportPdf::new();
        pdf.write_table("Relatório", &["Coluna".to_string()], &[]);
        let bytes = pdf.finish();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn muitas_linhas_quebram_em_mais_de_uma_pagina() {
        let rows: Vec<Vec<String>> = (0..100)
            .map(|i| vec![format!("linha {}", i), "x".to_string()])
            .collect();
        let mut pdf = ReportPdf::new();
        pdf.write_table("Relatório", &["A".to_string(), "B".to_string()], &rows);
        let bytes = pdf.finish();
        // cada página carrega o próprio MediaBox
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.matches("MediaBox").count() >= 2);
    }
}
