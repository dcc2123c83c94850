//! Bodies served at `/`.

/// Plain-text welcome for the minimal home page variant
pub const WELCOME_TEXT: &str = "Welcome to the Posts API! Try GET /api/posts.\n";

/// Blog demo page. The script fetches `/api/posts` and renders each title
/// with a short excerpt of its content.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Posts API</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
    h1 { margin-bottom: 0.25rem; }
    .subtitle { color: #666; margin-top: 0; }
    article { border-bottom: 1px solid #eee; padding: 1rem 0; }
    article h2 { margin: 0 0 0.25rem; font-size: 1.2rem; }
    .meta { color: #888; font-size: 0.85rem; }
    .error { color: #b00020; }
    code { background: #f4f4f4; padding: 0.1rem 0.3rem; border-radius: 3px; }
  </style>
</head>
<body>
  <h1>Posts API</h1>
  <p class="subtitle">An in-memory blog backend. Posts below are loaded from <code>GET /api/posts</code>.</p>
  <main id="posts"><p>Loading posts&hellip;</p></main>
  <script>
    const EXCERPT_LENGTH = 120;

    function excerpt(text) {
      return text.length > EXCERPT_LENGTH ? text.slice(0, EXCERPT_LENGTH) + "…" : text;
    }

    function render(posts) {
      const container = document.getElementById("posts");
      container.replaceChildren();
      if (posts.length === 0) {
        const empty = document.createElement("p");
        empty.textContent = "No posts yet.";
        container.appendChild(empty);
        return;
      }
      for (const post of posts) {
        const article = document.createElement("article");
        const title = document.createElement("h2");
        title.textContent = post.title;
        const meta = document.createElement("p");
        meta.className = "meta";
        meta.textContent = "by " + post.author + " · " + new Date(post.createdAt).toLocaleString();
        const body = document.createElement("p");
        body.textContent = excerpt(post.content);
        article.append(title, meta, body);
        container.appendChild(article);
      }
    }

    fetch("/api/posts")
      .then((res) => {
        if (!res.ok) throw new Error("HTTP " + res.status);
        return res.json();
      })
      .then((data) => render(data.posts))
      .catch((err) => {
        const container = document.getElementById("posts");
        container.innerHTML = "";
        const message = document.createElement("p");
        message.className = "error";
        message.textContent = "Failed to load posts: " + err.message;
        container.appendChild(message);
      });
  </script>
</body>
</html>
"#;
