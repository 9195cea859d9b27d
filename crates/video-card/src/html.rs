//! HTML markup for a rendered card
//!
//! Events are wired through `data-card-*` attributes; the hosting page
//! posts them back and swaps in the returned fragment.

use crate::view::{CardView, MediaRegion, DESCRIPTION_LINE_CLAMP, TITLE_LINE_CLAMP};

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const MEDIA_CLASS: &str =
    "w-full h-full object-cover transform group-hover:scale-105 transition-transform duration-300";

impl CardView {
    /// Render the card as a self-contained HTML fragment
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.push_html(&mut out);
        out
    }

    fn push_html(&self, out: &mut String) {
        let id = escape(&self.card_id);

        push_line(
            out,
            format!(
                r#"<div class="group card bg-base-100 shadow-xl hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-1" id="card-{id}" data-card-id="{id}" data-card-state="{state}" data-card-media="{media}" data-card-enter="pointer-enter" data-card-leave="pointer-leave">"#,
                id = id,
                state = state_attr(self),
                media = self.media.kind(),
            ),
        );
        out.push_str("<figure class=\"aspect-video relative overflow-hidden\">\n");
        self.push_media(out);

        let overlay_opacity = if self.show_play_overlay { "opacity-100" } else { "opacity-0" };
        push_line(
            out,
            format!(
                r#"<div class="play-overlay absolute inset-0 bg-black/40 {} transition-opacity duration-300 flex items-center justify-center" aria-hidden="true"><span class="icon icon-play w-12 h-12 text-white"></span></div>"#,
                overlay_opacity
            ),
        );
        push_line(
            out,
            format!(
                r#"<div class="duration-badge absolute bottom-2 right-2 bg-base-100 bg-opacity-90 backdrop-blur-sm px-3 py-1.5 rounded-full text-sm font-medium flex items-center shadow-lg"><span class="icon icon-clock mr-1.5"></span>{}</div>"#,
                escape(&self.duration)
            ),
        );
        out.push_str("</figure>\n");

        out.push_str("<div class=\"card-body p-6\">\n");
        push_line(
            out,
            format!(
                r#"<h2 class="card-title text-xl font-bold mb-2 line-clamp-{}">{}</h2>"#,
                TITLE_LINE_CLAMP,
                escape(&self.title)
            ),
        );
        push_line(
            out,
            format!(
                r#"<p class="text-base-content/70 text-sm line-clamp-{} mb-4">{}</p>"#,
                DESCRIPTION_LINE_CLAMP,
                escape(&self.description)
            ),
        );
        push_line(
            out,
            format!(
                r#"<p class="text-base-content/60 text-xs mb-6">{}</p>"#,
                escape(&self.uploaded)
            ),
        );

        out.push_str("<div class=\"grid grid-cols-2 gap-6 text-sm\">\n");
        for (block, icon, tone) in [
            (&self.original, "icon-file-up", "primary"),
            (&self.compressed, "icon-file-down", "secondary"),
        ] {
            push_line(
                out,
                format!(
                    r#"<div class="flex items-center space-x-3"><div class="p-2 rounded-lg bg-{tone}/10"><span class="icon {icon} text-{tone}"></span></div><div><div class="font-medium text-base-content/70">{label}</div><div class="font-semibold">{value}</div></div></div>"#,
                    tone = tone,
                    icon = icon,
                    label = escape(&block.label),
                    value = escape(&block.value),
                ),
            );
        }
        out.push_str("</div>\n");

        push_line(
            out,
            format!(
                r#"<div class="flex justify-between items-center mt-6"><div class="flex items-center space-x-2"><div class="text-sm font-medium">Compression</div><div class="badge badge-primary badge-lg">{}</div></div>"#,
                escape(&self.compression)
            ),
        );
        push_line(
            out,
            format!(
                r#"<button type="button" class="btn btn-primary btn-circle" aria-label="Download {title}" data-card-download="{url}" data-download-title="{title}"><span class="icon icon-download"></span></button></div>"#,
                title = escape(&self.download.title),
                url = escape(&self.download.url),
            ),
        );
        out.push_str("</div>\n</div>\n");
    }

    fn push_media(&self, out: &mut String) {
        let markup = match &self.media {
            MediaRegion::Thumbnail {
                url,
                alt,
                width,
                height,
            } => format!(
                r#"<img src="{}" alt="{}" width="{}" height="{}" class="{}" data-card-error="thumbnail-error">"#,
                escape(url),
                escape(alt),
                width,
                height,
                MEDIA_CLASS
            ),
            MediaRegion::Preview {
                url,
                autoplay,
                muted,
                looping,
            } => {
                let mut flags = String::new();
                if *autoplay {
                    flags.push_str(" autoplay playsinline");
                }
                if *muted {
                    flags.push_str(" muted");
                }
                if *looping {
                    flags.push_str(" loop");
                }
                format!(
                    r#"<video src="{}"{} class="{}" data-card-error="preview-error"></video>"#,
                    escape(url),
                    flags,
                    MEDIA_CLASS
                )
            }
            MediaRegion::ThumbnailUnavailable { message } => format!(
                r#"<div class="w-full h-full flex items-center justify-center bg-base-200"><p class="text-base-content/60">{}</p></div>"#,
                escape(message)
            ),
            MediaRegion::PreviewUnavailable { message } => format!(
                r#"<div class="w-full h-full flex items-center justify-center bg-base-200"><p class="text-error">{}</p></div>"#,
                escape(message)
            ),
        };
        push_line(out, markup);
    }
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

fn state_attr(view: &CardView) -> &'static str {
    match view.state {
        crate::state::PreviewState::Idle => "idle",
        crate::state::PreviewState::Previewing => "previewing",
        crate::state::PreviewState::PreviewFailed => "preview_failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardEvent, CardState};
    use crate::view::render_card;
    use crate::view::test_support::{context, video};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape(r#"say "hi" 'there'"#), "say &quot;hi&quot; &#39;there&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_idle_markup() {
        let html = render_card(&video(), &CardState::new(), &context()).to_html();

        assert!(html.contains(r#"data-card-id="abc123""#));
        assert!(html.contains(r#"data-card-state="idle""#));
        assert!(html.contains(r#"data-card-media="thumbnail""#));
        assert!(html.contains(r#"<img src="img://abc123/400x225" alt="My Clip" width="400" height="225""#));
        assert!(html.contains("opacity-0"));
        assert!(html.contains("2:05"));
        assert!(html.contains("Uploaded 3 hours ago"));
        assert!(html.contains("75%"));
        assert!(html.contains(r#"data-card-download="vid://abc123/1920x1080""#));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_preview_markup() {
        let mut state = CardState::new();
        state.apply(CardEvent::PointerEnter);
        let html = render_card(&video(), &state, &context()).to_html();

        assert!(html.contains("<video"));
        assert!(html.contains(" autoplay playsinline muted loop "));
        assert!(html.contains(r#"data-card-error="preview-error""#));
        assert!(html.contains("opacity-100"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_preview_failed_markup() {
        let mut state = CardState::new();
        state.apply(CardEvent::PointerEnter);
        state.apply(CardEvent::PreviewError);
        let html = render_card(&video(), &state, &context()).to_html();

        assert!(html.contains("Preview not available"));
        assert!(html.contains(r#"data-card-state="preview_failed""#));
        assert!(html.contains(r#"data-card-media="preview_unavailable""#));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_thumbnail_error_changes_media_marker() {
        let mut state = CardState::new();
        state.apply(CardEvent::ThumbnailError);
        let html = render_card(&video(), &state, &context()).to_html();

        assert!(html.contains(r#"data-card-state="idle""#));
        assert!(html.contains(r#"data-card-media="thumbnail_unavailable""#));
        assert!(html.ends_with("</div>\n</div>\n"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut v = video();
        v.title = r#"<script>alert("x")</script>"#.to_string();
        v.description = "Tom & Jerry's <b>best</b>".to_string();
        let html = render_card(&v, &CardState::new(), &context()).to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry&#39;s &lt;b&gt;best&lt;/b&gt;"));
    }
}
