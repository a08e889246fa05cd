use crate::config::TrackerConfig;
use crate::models::{GeneralView, ProgressKind};
use crate::widget::{Document, CLOSE_TRIGGER_ID, OPEN_TRIGGER_ID, PANEL_ID};

/// Rendered markup that the goals panel is wired against.
pub struct Page {
    html: String,
}

impl Page {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl Document for Page {
    fn has_element(&self, id: &str) -> bool {
        self.html.contains(&format!("id=\"{id}\""))
    }
}

pub fn render_index(config: &TrackerConfig, balances: &[GeneralView]) -> Page {
    let cards: String = balances.iter().map(render_balance_card).collect();
    let goals: String = config.sites.iter().map(|site| render_goal_card(site)).collect();

    Page::new(
        INDEX_HTML
            .replace("{{BALANCE_CARDS}}", &cards)
            .replace("{{GOAL_CARDS}}", &goals)
            .replace("{{PANEL_ID}}", PANEL_ID)
            .replace("{{OPEN_ID}}", OPEN_TRIGGER_ID)
            .replace("{{CLOSE_ID}}", CLOSE_TRIGGER_ID),
    )
}

fn render_balance_card(view: &GeneralView) -> String {
    let site = escape_html(&view.site);
    format!(
        r#"
      <div class="stat">
        <span class="label">{site}</span>
        <span class="value"><span id="balance-{site}">{balance}</span> / <span id="target-{site}">{target}</span></span>
        <div class="bar"><div class="fill" id="fill-{site}" style="width: {width}">{text}</div></div>
        <form class="entry" data-site="{site}">
          <input id="input-{site}" type="text" inputmode="decimal" placeholder="New balance" />
          <button class="btn-add" type="submit">Save</button>
        </form>
      </div>"#,
        balance = view.balance_label,
        target = view.target_label,
        width = view.fill.width,
        text = view.fill.text,
    )
}

fn render_goal_card(site: &str) -> String {
    let site = escape_html(site);
    let rows: String = ProgressKind::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"
        <div class="goal-row">
          <span class="label">{kind}: <span id="progress-{kind}-{site}">0</span> / <span id="goal-{kind}-{site}">0</span></span>
          <div class="bar"><div class="fill" id="fill-{kind}-{site}" style="width: 0%"></div></div>
          <form class="entry" data-site="{site}" data-kind="{kind}">
            <input id="input-{kind}-{site}" type="text" inputmode="decimal" placeholder="Add {kind}" />
            <button class="btn-sub" type="submit">Add</button>
          </form>
        </div>"#
            )
        })
        .collect();

    format!(
        r#"
      <div class="stat">
        <span class="label">{site}</span>{rows}
      </div>"#
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Progress Widget</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg-1);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.3rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .bar {
      background: rgba(47, 72, 88, 0.1);
      border-radius: 999px;
      overflow: hidden;
      height: 22px;
    }

    .fill {
      background: var(--accent);
      color: white;
      height: 100%;
      font-size: 0.8rem;
      text-align: center;
      line-height: 22px;
    }

    .entry {
      display: flex;
      gap: 8px;
    }

    .entry input {
      flex: 1;
      min-width: 0;
      padding: 8px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-add {
      background: var(--accent);
    }

    .btn-sub {
      background: var(--accent-2);
    }

    .modal {
      display: none;
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 40, 0.45);
      align-items: center;
      justify-content: center;
    }

    .modal-content {
      background: var(--bg-1);
      border-radius: 24px;
      padding: 28px;
      width: min(760px, 94%);
      display: grid;
      gap: 16px;
    }

    .goal-row {
      display: grid;
      gap: 6px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Progress</h1>
      <button class="btn-sub" id="{{OPEN_ID}}" type="button">Daily goals</button>
    </header>

    <section class="panel">{{BALANCE_CARDS}}
    </section>
  </main>

  <div class="modal" id="{{PANEL_ID}}">
    <div class="modal-content">
      <button class="btn-add" id="{{CLOSE_ID}}" type="button">Close</button>
      <section class="panel">{{GOAL_CARDS}}
      </section>
    </div>
  </div>

  <script>
    const modal = document.getElementById('{{PANEL_ID}}');
    const openBtn = document.getElementById('{{OPEN_ID}}');
    const closeBtn = document.getElementById('{{CLOSE_ID}}');

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const setFill = (el, fill) => {
      el.style.width = fill.width;
      el.textContent = fill.text;
    };

    const renderDaily = (bar) => {
      document.getElementById(`progress-${bar.kind}-${bar.site}`).textContent = bar.current_label;
      document.getElementById(`goal-${bar.kind}-${bar.site}`).textContent = bar.goal_label;
      setFill(document.getElementById(`fill-${bar.kind}-${bar.site}`), bar.fill);
    };

    const applyPanel = (panel) => {
      modal.style.display = panel.visible ? 'flex' : 'none';
      panel.sites.forEach((site) => {
        renderDaily(site.rub);
        renderDaily(site.tasks);
      });
    };

    document.querySelectorAll('.entry').forEach((form) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const input = form.querySelector('input');
        const { site, kind } = form.dataset;
        const url = kind ? `/api/goals/${site}/${kind}` : `/api/balances/${site}`;
        post(url, { value: input.value })
          .then((view) => {
            if (kind) {
              renderDaily(view);
            } else {
              document.getElementById(`balance-${site}`).textContent = view.balance_label;
              setFill(document.getElementById(`fill-${site}`), view.fill);
            }
            input.value = '';
          })
          .catch((err) => alert(err.message));
      });
    });

    openBtn.addEventListener('click', (event) => {
      event.stopPropagation();
      post('/api/goals/open').then(applyPanel).catch((err) => alert(err.message));
    });

    closeBtn.addEventListener('click', (event) => {
      event.stopPropagation();
      post('/api/goals/close').then(applyPanel).catch((err) => alert(err.message));
    });

    window.addEventListener('click', (event) => {
      if (modal.style.display !== 'flex') {
        return;
      }
      post('/api/goals/click', { target: event.target.id || '' })
        .then(applyPanel)
        .catch((err) => alert(err.message));
    });
  </script>
</body>
</html>
"#;
