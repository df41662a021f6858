use axum::response::Html;

/// GET /
/// Serves the job-description form. The page talks to the two JSON endpoints
/// and saves the rendered document client-side.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Resume Tailor</title>
    <style>
      body { margin: 0; background: #f8fafc; color: #0f172a; font-family: system-ui, sans-serif; }
      main { max-width: 48rem; margin: 0 auto; padding: 4rem 1.5rem; display: flex; flex-direction: column; gap: 2.5rem; }
      h1 { margin: 0 0 0.75rem; font-size: 1.875rem; font-weight: 600; }
      header p { margin: 0; color: #475569; }
      label { display: block; font-size: 0.875rem; font-weight: 500; color: #334155; margin-bottom: 1rem; }
      textarea { box-sizing: border-box; width: 100%; min-height: 220px; padding: 1rem; border: 1px solid #e2e8f0; border-radius: 0.5rem; font: inherit; font-size: 0.875rem; }
      button { border-radius: 0.5rem; padding: 0.625rem 1.25rem; font-weight: 600; font-size: 0.875rem; cursor: pointer; }
      button:disabled { cursor: not-allowed; opacity: 0.5; }
      #generate { margin-top: 1rem; background: #0f172a; color: #fff; border: none; }
      #download { background: transparent; border: 1px solid #cbd5e1; color: #334155; font-size: 0.75rem; }
      .bar { display: flex; justify-content: space-between; align-items: center; }
      pre { min-height: 160px; white-space: pre-wrap; background: #fff; border: 1px solid #e2e8f0; border-radius: 0.5rem; padding: 1rem; font-size: 0.75rem; color: #334155; }
      .error { border: 1px solid #fecaca; background: #fef2f2; color: #b91c1c; border-radius: 0.5rem; padding: 1rem; font-size: 0.875rem; }
      .hint { font-size: 0.75rem; color: #64748b; }
    </style>
  </head>
  <body>
    <main>
      <header>
        <h1>Resume Tailor</h1>
        <p>Paste a job description and generate a tailored resume outline.</p>
      </header>

      <form id="form">
        <label for="jd">Job description</label>
        <textarea id="jd" placeholder="Paste the job description here..." required></textarea>
        <button id="generate" type="submit" disabled>Generate</button>
      </form>

      <section>
        <div class="bar">
          <h2>Result</h2>
          <button id="download" type="button" disabled>Download HTML</button>
        </div>
        <p id="error" class="error" hidden></p>
        <div id="output">
          <pre id="result">Your tailored resume JSON will appear here.</pre>
          <p class="hint">Open the HTML file and use Print to save a one-page PDF.</p>
        </div>
      </section>
    </main>

    <script>
      const jd = document.getElementById("jd");
      const generateButton = document.getElementById("generate");
      const downloadButton = document.getElementById("download");
      const errorBox = document.getElementById("error");
      const output = document.getElementById("output");
      const result = document.getElementById("result");
      let resumeJson = null;
      let loading = false;

      function showError(message) {
        errorBox.textContent = message;
        errorBox.hidden = !message;
        output.hidden = Boolean(message);
      }

      function refresh() {
        generateButton.disabled = loading || jd.value.trim().length === 0;
        generateButton.textContent = loading ? "Generating..." : "Generate";
        downloadButton.disabled = !resumeJson;
      }

      jd.addEventListener("input", refresh);

      document.getElementById("form").addEventListener("submit", async (event) => {
        event.preventDefault();
        loading = true;
        resumeJson = null;
        result.textContent = "Your tailored resume JSON will appear here.";
        showError("");
        refresh();

        const controller = new AbortController();
        const timeout = setTimeout(() => controller.abort(), 25000);
        try {
          const response = await fetch("/api/generate-resume", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify({ jobDescription: jd.value }),
            signal: controller.signal,
          });
          const data = await response.json();
          if (!response.ok) {
            showError((data && data.error) || "Something went wrong.");
          } else if (data && data.resume) {
            resumeJson = data.resume;
            result.textContent = JSON.stringify(data.resume, null, 2);
          } else {
            showError("No resume data returned.");
          }
        } catch (error) {
          showError(error.name === "AbortError"
            ? "Request timed out. Please try again."
            : "Failed to reach the server.");
        } finally {
          clearTimeout(timeout);
          loading = false;
          refresh();
        }
      });

      downloadButton.addEventListener("click", async () => {
        if (!resumeJson) {
          showError("Generate a resume before downloading.");
          return;
        }
        downloadButton.disabled = true;
        downloadButton.textContent = "Preparing...";
        showError("");
        try {
          const response = await fetch("/api/render-resume", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify({ resume: resumeJson }),
          });
          if (!response.ok) {
            const data = await response.json().catch(() => null);
            showError((data && data.error) || "Failed to render resume.");
            return;
          }
          const blob = new Blob([await response.text()], { type: "text/html" });
          const url = URL.createObjectURL(blob);
          const link = document.createElement("a");
          link.href = url;
          link.download = "tailored-resume.html";
          link.click();
          URL.revokeObjectURL(url);
        } catch {
          showError("Failed to render resume.");
        } finally {
          downloadButton.textContent = "Download HTML";
          refresh();
        }
      });
    </script>
  </body>
</html>
"#;
