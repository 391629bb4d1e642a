pub fn render_index(sheet_configured: bool) -> String {
    let badge = if sheet_configured {
        r#"<span class="badge badge-live"><span class="dot"></span>Spreadsheet active</span>"#
    } else {
        r#"<span class="badge badge-demo">Demo mode &mdash; saves stay on this device</span>"#
    };
    INDEX_HTML.replace("{{SHEET_BADGE}}", badge)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Staff Sync</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2fb;
      --bg-2: #c9d7f5;
      --ink: #1f2533;
      --accent: #4f46e5;
      --ok: #10b981;
      --warn: #ef4444;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(31, 37, 51, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e6ecfa 60%, #f4f6fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 12px;
      flex-wrap: wrap;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5d6475;
      font-size: 0.95rem;
    }

    .badge {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      font-size: 0.72rem;
      font-weight: 600;
      letter-spacing: 0.08em;
      text-transform: uppercase;
      padding: 8px 14px;
      border-radius: 999px;
    }

    .badge-live {
      background: #d8f5e8;
      color: #047857;
    }

    .badge-demo {
      background: #eef0f4;
      color: #5d6475;
    }

    .dot {
      width: 8px;
      height: 8px;
      border-radius: 50%;
      background: var(--ok);
    }

    .columns {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 28px;
    }

    @media (max-width: 760px) {
      .columns {
        grid-template-columns: 1fr;
      }
    }

    .panel {
      background: #fff;
      border: 1px solid #e4e8f2;
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .panel h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.82rem;
      font-weight: 600;
      color: #5d6475;
    }

    input[type="date"],
    input[type="text"],
    textarea {
      font: inherit;
      padding: 10px 12px;
      border: 1px solid #d7dceb;
      border-radius: 12px;
      background: #f8f9fd;
    }

    textarea {
      min-height: 72px;
      resize: vertical;
    }

    .status-row {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 8px;
    }

    .status-row button {
      font: inherit;
      font-size: 0.78rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.04em;
      padding: 12px 0;
      border-radius: 12px;
      border: 1px solid #d7dceb;
      background: #fff;
      color: #5d6475;
      cursor: pointer;
    }

    .status-row button.active {
      border-color: var(--accent);
      background: #eef0ff;
      color: var(--accent);
    }

    .hours-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .hours-row input[type="range"] {
      flex: 1;
      accent-color: var(--accent);
    }

    .hours-value {
      min-width: 52px;
      text-align: center;
      background: var(--accent);
      color: #fff;
      border-radius: 10px;
      padding: 6px 0;
      font-weight: 600;
    }

    .save-button {
      font: inherit;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      padding: 14px 0;
      border: none;
      border-radius: 14px;
      background: var(--ink);
      color: #fff;
      cursor: pointer;
    }

    .save-button:disabled {
      opacity: 0.5;
      cursor: wait;
    }

    .status-message {
      min-height: 1.2em;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .status-message.ok { color: var(--ok); }
    .status-message.error { color: var(--warn); }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 10px;
    }

    .stat {
      background: #f8f9fd;
      border: 1px solid #e4e8f2;
      border-radius: 14px;
      padding: 14px 10px;
      text-align: center;
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
    }

    .stat .label {
      font-size: 0.68rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      color: #5d6475;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.85rem;
    }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid #eef0f4;
    }

    th {
      font-size: 0.7rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      color: #5d6475;
    }

    .pill {
      display: inline-block;
      padding: 3px 10px;
      border-radius: 999px;
      font-size: 0.72rem;
      font-weight: 600;
      text-transform: capitalize;
    }

    .pill.working { background: #d8f5e8; color: #047857; }
    .pill.leave { background: #fde4e4; color: #b91c1c; }
    .pill.holiday { background: #fdf0d5; color: #b45309; }

    .insights {
      white-space: pre-wrap;
      font-size: 0.9rem;
      line-height: 1.5;
      color: #3c4354;
    }

    .export-link {
      justify-self: start;
      font-size: 0.82rem;
      font-weight: 600;
      color: var(--accent);
      text-decoration: none;
    }

    .export-link:hover {
      text-decoration: underline;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Staff Sync</h1>
        <p class="subtitle">Mark daily attendance, mirror it to your sheet, watch the totals.</p>
      </div>
      {{SHEET_BADGE}}
    </header>

    <div class="columns">
      <section class="panel">
        <h2>Mark attendance</h2>
        <form id="attendance-form">
          <label>
            Date
            <input type="date" id="date" required />
          </label>
          <label>
            Status
            <div class="status-row" id="status-row">
              <button type="button" data-status="working" class="active">Work</button>
              <button type="button" data-status="leave">Leave</button>
              <button type="button" data-status="holiday">Holiday</button>
            </div>
          </label>
          <div id="working-fields">
            <label>
              Place of visit
              <input type="text" id="place" placeholder="e.g. Client HQ, Site B" />
            </label>
            <label>
              Purpose of visit
              <textarea id="purpose" placeholder="What was the main goal?"></textarea>
            </label>
            <label>
              Hours logged
              <div class="hours-row">
                <input type="range" id="hours" min="1" max="24" value="8" />
                <span class="hours-value" id="hours-value">8h</span>
              </div>
            </label>
          </div>
          <button type="submit" class="save-button" id="save-button">Finalize &amp; sync</button>
          <p class="status-message" id="status-message"></p>
        </form>
      </section>

      <section class="panel">
        <h2>Overview</h2>
        <div class="stat-grid">
          <div class="stat"><div class="value" id="stat-working">0</div><div class="label">Working</div></div>
          <div class="stat"><div class="value" id="stat-leave">0</div><div class="label">Leave</div></div>
          <div class="stat"><div class="value" id="stat-holiday">0</div><div class="label">Holiday</div></div>
          <div class="stat"><div class="value" id="stat-hours">0</div><div class="label">Hours</div></div>
        </div>
        <h2>AI insights</h2>
        <p class="insights" id="insights">Loading insights...</p>
      </section>
    </div>

    <section class="panel">
      <h2>History</h2>
      <table>
        <thead>
          <tr><th>Date</th><th>Status</th><th>Place</th><th>Purpose</th><th>Hours</th></tr>
        </thead>
        <tbody id="entries-body">
          <tr><td colspan="5">No entries yet.</td></tr>
        </tbody>
      </table>
      <a class="export-link" href="/api/export.csv">Export CSV</a>
    </section>
  </main>

  <script>
    const form = document.getElementById('attendance-form');
    const dateInput = document.getElementById('date');
    const statusRow = document.getElementById('status-row');
    const workingFields = document.getElementById('working-fields');
    const placeInput = document.getElementById('place');
    const purposeInput = document.getElementById('purpose');
    const hoursInput = document.getElementById('hours');
    const hoursValue = document.getElementById('hours-value');
    const saveButton = document.getElementById('save-button');
    const statusMessage = document.getElementById('status-message');
    const entriesBody = document.getElementById('entries-body');

    let status = 'working';

    dateInput.value = new Date().toISOString().slice(0, 10);

    const setStatus = (next) => {
      status = next;
      statusRow.querySelectorAll('button').forEach((button) => {
        button.classList.toggle('active', button.dataset.status === next);
      });
      workingFields.style.display = next === 'working' ? '' : 'none';
    };

    statusRow.querySelectorAll('button').forEach((button) => {
      button.addEventListener('click', () => setStatus(button.dataset.status));
    });

    hoursInput.addEventListener('input', () => {
      hoursValue.textContent = hoursInput.value + 'h';
    });

    const setMessage = (text, kind) => {
      statusMessage.textContent = text;
      statusMessage.className = 'status-message' + (kind ? ' ' + kind : '');
    };

    const escapeHtml = (text) =>
      text.replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');

    const loadEntries = async () => {
      const res = await fetch('/api/attendance');
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      const entries = await res.json();
      if (entries.length === 0) {
        entriesBody.innerHTML = '<tr><td colspan="5">No entries yet.</td></tr>';
        return;
      }
      entriesBody.innerHTML = entries
        .map((entry) => `
          <tr>
            <td>${entry.date}</td>
            <td><span class="pill ${entry.status}">${entry.status}</span></td>
            <td>${escapeHtml(entry.placeVisit || '')}</td>
            <td>${escapeHtml(entry.purposeVisit || '')}</td>
            <td>${entry.hoursWorked ?? ''}</td>
          </tr>`)
        .join('');
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      const stats = await res.json();
      document.getElementById('stat-working').textContent = stats.workingDays;
      document.getElementById('stat-leave').textContent = stats.leaveDays;
      document.getElementById('stat-holiday').textContent = stats.holidayDays;
      document.getElementById('stat-hours').textContent = stats.totalHours;
    };

    const loadInsights = async () => {
      const res = await fetch('/api/insights');
      if (!res.ok) {
        throw new Error('Unable to load insights');
      }
      const body = await res.json();
      document.getElementById('insights').textContent = body.insights;
    };

    const refresh = async () => {
      await Promise.all([loadEntries(), loadStats()]);
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      saveButton.disabled = true;
      setMessage('Syncing...', '');

      const payload = {
        date: dateInput.value,
        status,
        placeVisit: status === 'working' ? placeInput.value : null,
        purposeVisit: status === 'working' ? purposeInput.value : null,
        hoursWorked: Number(hoursInput.value)
      };

      try {
        const res = await fetch('/api/attendance', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        const result = await res.json();
        if (result.success) {
          setMessage('Success! Synced to sheet.', 'ok');
        } else {
          setMessage(result.error || 'Sync failed, saved locally.', 'error');
        }
        await refresh();
      } catch (err) {
        setMessage(err.message, 'error');
      } finally {
        saveButton.disabled = false;
      }
    });

    refresh().catch((err) => setMessage(err.message, 'error'));
    loadInsights().catch(() => {
      document.getElementById('insights').textContent = 'Insights unavailable.';
    });
  </script>
</body>
</html>
"#;
