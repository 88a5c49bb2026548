//! Page template
//!
//! The stylesheet and the last-modified script are fixed text. Everything
//! interpolated into the markup goes through `escape`.

use super::escape::{encode_path_segment, escape_attr, escape_text};

/// Title shown for images that have no caption yet
pub const PLACEHOLDER_TITLE: &str = "（キャプション未入力）";

/// Instructions under the heading
const INSTRUCTIONS: &str = "サムネイルをクリックすると画像ファイルを表示します。";

/// Grid: 3 columns, 2 at <= 900px, 1 at <= 520px
const STYLE: &str = r#"  <style>
    :root { --gap: 10px; --max: 1100px; }

    body {
      margin: 0;
      font-family: system-ui, -apple-system, "Hiragino Sans", "Noto Sans JP", sans-serif;
      background: #fff;
      color: #111;
    }

    header {
      max-width: var(--max);
      margin: 24px auto 8px;
      padding: 0 16px;
    }
    h1 { font-size: 1.2rem; margin: 0; font-weight: 600; }
    p  { margin: 8px 0 0; font-size: 0.95rem; color: #444; }

    .grid {
      max-width: var(--max);
      margin: 0 auto 32px;
      padding: 0 16px;
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: var(--gap);
    }
    @media (max-width: 900px) { .grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 520px) { .grid { grid-template-columns: 1fr; } }

    figure {
      margin: 0;
      border-radius: 12px;
      overflow: hidden;
      background: #f4f4f4;
      box-shadow: 0 1px 3px rgba(0,0,0,.08);
    }

    a.thumb {
      display: block;
      text-decoration: none;
      color: inherit;
    }

    img {
      width: 100%;
      aspect-ratio: 4 / 3;
      object-fit: cover;
      display: block;
      transform: scale(1);
      transition: transform .12s ease-in-out;
    }
    a.thumb:hover img { transform: scale(1.02); }

    figcaption {
      padding: 8px 10px 10px;
      font-size: 0.92rem;
      line-height: 1.35;
      background: #fff;
      border-top: 1px solid rgba(0,0,0,.06);
    }

    .cap-title { font-weight: 600; display: block; }
    .cap-note  { color: #444; font-size: 0.9em; display: block; margin-top: 2px; }

    footer {
      max-width: var(--max);
      margin: 0 auto 40px;
      padding: 0 16px;
      color: #444;
      font-size: 0.92rem;
    }
  </style>
"#;

/// Fills #last-updated with the browser's view of the file's mtime
const SCRIPT: &str = r#"  <script>
    const lastModified = new Date(document.lastModified);
    const y = lastModified.getFullYear();
    const m = String(lastModified.getMonth() + 1).padStart(2, '0');
    const d = String(lastModified.getDate()).padStart(2, '0');
    document.getElementById("last-updated").textContent = `${y}年${m}月${d}日`;
  </script>
"#;

/// One image with its resolved caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub filename: String,
    /// Alt text (filename without extension)
    pub alt: String,
    /// Caption title; blank renders the placeholder
    pub title: String,
    /// Caption note; blank renders no note element
    pub note: String,
}

impl Figure {
    /// Render one `<figure>` block linking to `{prefix}/{filename}`
    pub fn render(&self, prefix: &str) -> String {
        let path = encode_path_segment(&self.filename);
        let url = if prefix.is_empty() {
            escape_attr(&path)
        } else {
            escape_attr(&format!("{}/{}", prefix, path))
        };

        let title = if self.title.is_empty() {
            PLACEHOLDER_TITLE
        } else {
            self.title.as_str()
        };

        let note = if self.note.is_empty() {
            String::new()
        } else {
            format!(
                "\n        <span class=\"cap-note\">{}</span>",
                escape_attr(&self.note)
            )
        };

        format!(
            "    <figure>\n\
             \x20     <a class=\"thumb\" href=\"{url}\">\n\
             \x20       <img src=\"{url}\" alt=\"{alt}\" loading=\"lazy\">\n\
             \x20     </a>\n\
             \x20     <figcaption>\n\
             \x20       <span class=\"cap-title\">{title}</span>{note}\n\
             \x20     </figcaption>\n\
             \x20   </figure>\n",
            url = url,
            alt = escape_attr(&self.alt),
            title = escape_attr(title),
            note = note,
        )
    }
}

/// The whole gallery page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPage {
    /// `<title>` and `<h1>`
    pub title: String,
    /// Image URL prefix relative to the page
    pub image_prefix: String,
    pub figures: Vec<Figure>,
    /// Generation time, already formatted for display
    pub generated_at: String,
}

impl AlbumPage {
    pub fn render(&self) -> String {
        let figures: String = self
            .figures
            .iter()
            .map(|figure| figure.render(&self.image_prefix))
            .collect();
        let title = escape_text(&self.title);

        format!(
            "<!doctype html>\n\
             <html lang=\"ja\">\n\
             <head>\n\
             \x20 <meta charset=\"utf-8\" />\n\
             \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
             \x20 <title>{title}</title>\n\
             {style}\
             </head>\n\
             \n\
             <body>\n\
             \x20 <header>\n\
             \x20   <h1>{title}</h1>\n\
             \x20   <p>{instructions}</p>\n\
             \x20 </header>\n\
             \n\
             \x20 <main class=\"grid\">\n\
             {figures}\n\
             \x20 </main>\n\
             \n\
             \x20 <footer>\n\
             \x20   <hr>\n\
             \x20   生成日時：{generated}<br>\n\
             \x20   最終更新（ブラウザ計算）：<span id=\"last-updated\"></span>\n\
             \x20 </footer>\n\
             \n\
             {script}\
             </body>\n\
             </html>\n",
            title = title,
            style = STYLE,
            instructions = INSTRUCTIONS,
            figures = figures.trim_end(),
            generated = escape_text(&self.generated_at),
            script = SCRIPT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(filename: &str, title: &str, note: &str) -> Figure {
        Figure {
            filename: filename.to_string(),
            alt: filename.split('.').next().unwrap_or_default().to_string(),
            title: title.to_string(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_figure_with_caption_and_note() {
        let html = figure("a.jpg", "Morning walk", "by the river").render("images");

        assert_eq!(
            html,
            "    <figure>\n\
             \x20     <a class=\"thumb\" href=\"images/a.jpg\">\n\
             \x20       <img src=\"images/a.jpg\" alt=\"a\" loading=\"lazy\">\n\
             \x20     </a>\n\
             \x20     <figcaption>\n\
             \x20       <span class=\"cap-title\">Morning walk</span>\n\
             \x20       <span class=\"cap-note\">by the river</span>\n\
             \x20     </figcaption>\n\
             \x20   </figure>\n"
        );
    }

    #[test]
    fn test_placeholder_and_no_note() {
        let html = figure("b.png", "", "").render("images");

        assert!(html.contains("<span class=\"cap-title\">（キャプション未入力）</span>"));
        assert!(!html.contains("cap-note"));
    }

    #[test]
    fn test_escaping_in_every_context() {
        let nasty = r#"<script>&"'"#;
        let escaped = "&lt;script&gt;&amp;&quot;&#39;";
        let fig = Figure {
            filename: format!("{}.jpg", nasty),
            alt: nasty.to_string(),
            title: nasty.to_string(),
            note: nasty.to_string(),
        };
        let html = fig.render("images");

        assert!(html.contains(&format!("href=\"images/{}.jpg\"", escaped)));
        assert!(html.contains(&format!("src=\"images/{}.jpg\"", escaped)));
        assert!(html.contains(&format!("alt=\"{}\"", escaped)));
        assert!(html.contains(&format!("<span class=\"cap-title\">{}</span>", escaped)));
        assert!(html.contains(&format!("<span class=\"cap-note\">{}</span>", escaped)));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_url_structure_characters_in_filename() {
        let html = figure("a#1 100%?.jpg", "", "").render("images");

        assert!(html.contains("href=\"images/a%231 100%25%3F.jpg\""));
        assert!(html.contains("src=\"images/a%231 100%25%3F.jpg\""));
    }

    #[test]
    fn test_page_shell() {
        let page = AlbumPage {
            title: "アルバム".to_string(),
            image_prefix: "images".to_string(),
            figures: vec![figure("a.jpg", "One", "")],
            generated_at: "2026-10-18 09:30:00".to_string(),
        };
        let html = page.render();

        assert!(html.starts_with("<!doctype html>\n<html lang=\"ja\">"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains("<title>アルバム</title>"));
        assert!(html.contains("grid-template-columns: repeat(3, 1fr)"));
        assert!(html.contains("@media (max-width: 900px)"));
        assert!(html.contains("@media (max-width: 520px)"));
        assert!(html.contains("生成日時：2026-10-18 09:30:00<br>"));
        assert!(html.contains("<span id=\"last-updated\"></span>"));
        assert!(html.contains("document.lastModified"));
        assert!(html.contains("    </figure>\n  </main>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_empty_album() {
        let page = AlbumPage {
            title: "アルバム".to_string(),
            image_prefix: "images".to_string(),
            figures: Vec::new(),
            generated_at: String::new(),
        };
        let html = page.render();

        assert!(html.contains("<main class=\"grid\">\n\n  </main>"));
        assert!(!html.contains("<figure>"));
    }
}
