//! Full gallery page around the rendered cards

use video_card::CardView;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Compressed videos</title>
</head>
<body class="bg-base-200 min-h-screen">
<main class="container mx-auto p-4">
<h1 class="text-2xl font-bold mb-4">Compressed videos</h1>
"#;

// Pointer and media events are posted back to the host, which answers with
// the re-rendered card. Media errors and mouseenter/leave do not bubble, so
// the listeners run in the capture phase. Events for one card are sent in
// order; a response is dropped once a newer event for that card is pending,
// and a fragment is only swapped in when its state or media differs, so the
// mounted preview keeps playing.
const PAGE_SCRIPT: &str = r#"<script>
(function () {
  var latest = {};
  var queues = {};
  function post(path) {
    return fetch(path, { method: "POST" });
  }
  function parse(html) {
    var template = document.createElement("template");
    template.innerHTML = html.trim();
    return template.content.firstElementChild;
  }
  function sameView(a, b) {
    return a.dataset.cardState === b.dataset.cardState &&
      a.dataset.cardMedia === b.dataset.cardMedia;
  }
  function swap(id, event) {
    var seq = (latest[id] || 0) + 1;
    latest[id] = seq;
    queues[id] = (queues[id] || Promise.resolve())
      .then(function () {
        return post("/cards/" + encodeURIComponent(id) + "/" + event);
      })
      .then(function (res) { return res.ok ? res.text() : null; })
      .then(function (html) {
        if (!html || seq !== latest[id]) { return; }
        var current = document.getElementById("card-" + id);
        var next = parse(html);
        if (current && next && !sameView(current, next)) { current.replaceWith(next); }
      })
      .catch(function () {});
  }
  function cardOf(el) {
    return el && el.closest ? el.closest("[data-card-id]") : null;
  }
  ["mouseenter", "mouseleave"].forEach(function (type) {
    document.addEventListener(type, function (e) {
      var el = e.target;
      if (!el.dataset || !el.dataset.cardId) { return; }
      swap(el.dataset.cardId, type === "mouseenter" ? el.dataset.cardEnter : el.dataset.cardLeave);
    }, true);
  });
  document.addEventListener("error", function (e) {
    var el = e.target, card = cardOf(el);
    if (card && el.dataset && el.dataset.cardError) { swap(card.dataset.cardId, el.dataset.cardError); }
  }, true);
  document.addEventListener("click", function (e) {
    var button = e.target.closest ? e.target.closest("[data-card-download]") : null;
    var card = cardOf(button);
    if (!card) { return; }
    post("/cards/" + encodeURIComponent(card.dataset.cardId) + "/download")
      .then(function (res) { return res.json(); })
      .then(function (d) {
        var a = document.createElement("a");
        a.href = d.url; a.download = d.file_name; a.rel = "noopener";
        document.body.appendChild(a); a.click(); a.remove();
      });
  });
})();
</script>
"#;

/// Render the full page for a set of cards
pub fn render_gallery_page(cards: &[CardView]) -> String {
    let mut html = String::from(PAGE_HEAD);

    if cards.is_empty() {
        html.push_str("<p class=\"text-base-content/60\">No videos yet.</p>\n");
    } else {
        html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">\n");
        for card in cards {
            html.push_str(&card.to_html());
        }
        html.push_str("</div>\n");
    }

    html.push_str("</main>\n");
    html.push_str(PAGE_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}
