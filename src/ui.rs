pub fn render_index() -> String {
    INDEX_HTML.replace("{{VERSION}}", env!("CARGO_PKG_VERSION"))
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daymark</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #8b857d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --ok: #3f8f5a;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    header p {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
      gap: 24px;
    }

    section {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
      align-content: start;
    }

    h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .item {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .item .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 8px;
    }

    .item .title {
      font-weight: 600;
    }

    .item .meta {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .clock {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
      font-variant-numeric: tabular-nums;
    }

    .clock.done {
      color: var(--ok);
    }

    .chip {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
    }

    form {
      display: grid;
      gap: 8px;
      padding-top: 8px;
      border-top: 1px dashed rgba(47, 72, 88, 0.2);
    }

    input, select, button {
      font: inherit;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 8px 10px;
    }

    button {
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      border: none;
    }

    button.ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 4px 8px;
    }

    button.log {
      background: var(--accent);
    }

    .days {
      display: flex;
      gap: 6px;
      flex-wrap: wrap;
      font-size: 0.85rem;
    }

    #alerts {
      display: grid;
      gap: 8px;
    }

    .alert {
      background: var(--accent);
      color: white;
      border-radius: 14px;
      padding: 10px 14px;
    }

    .bars {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
      align-items: end;
      height: 80px;
    }

    .bars div {
      background: var(--accent-2);
      border-radius: 6px 6px 0 0;
      min-height: 2px;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status.error {
      color: #b0302a;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daymark</h1>
      <p>Countdowns and habits &middot; v{{VERSION}}</p>
      <div class="status" id="status"></div>
    </header>

    <div id="alerts"></div>

    <div class="columns">
      <section>
        <h2>Countdowns</h2>
        <div id="countdowns"></div>
        <form id="countdown-form">
          <input name="title" placeholder="Title" required />
          <input name="description" placeholder="Description" />
          <input name="target_date" type="datetime-local" required />
          <input name="notify_before" type="number" min="0" placeholder="Notify minutes before" />
          <label><input name="is_timer" type="checkbox" /> Timer</label>
          <button type="submit">Add countdown</button>
        </form>
      </section>

      <section>
        <h2>Habits</h2>
        <select id="category-filter"><option value="">All categories</option></select>
        <div id="habits"></div>
        <form id="habit-form">
          <input name="title" placeholder="Title" required />
          <input name="description" placeholder="Description" />
          <select name="frequency">
            <option value="daily">Daily</option>
            <option value="weekly">Weekly</option>
            <option value="custom">Custom days</option>
          </select>
          <div class="days" id="day-picker"></div>
          <select name="category_id"><option value="">No category</option></select>
          <button type="submit">Add habit</button>
        </form>
      </section>

      <section>
        <h2>Last 7 days</h2>
        <div class="bars" id="bars"></div>
        <h2>Categories</h2>
        <div id="categories"></div>
        <form id="category-form">
          <input name="name" placeholder="Name" required />
          <input name="color" type="color" value="#ff6b4a" />
          <button type="submit">Add category</button>
        </form>
      </section>
    </div>
  </main>

  <script>
    const DAY_NAMES = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];
    let countdowns = [];
    let categories = [];

    const statusEl = document.getElementById('status');
    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = `status ${kind || ''}`;
    };

    const esc = (value) => String(value ?? '').replace(/[&<>"']/g, (c) => ({
      '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
    })[c]);

    const api = async (path, options = {}) => {
      const res = await fetch(`/api${path}`, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      const body = await res.json().catch(() => ({}));
      if (!res.ok) {
        throw new Error(body.detail || `Request failed (${res.status})`);
      }
      return body;
    };

    const formatRemaining = (target) => {
      let left = Math.max(0, Math.floor((new Date(target) - Date.now()) / 1000));
      const d = Math.floor(left / 86400); left %= 86400;
      const h = Math.floor(left / 3600); left %= 3600;
      const m = Math.floor(left / 60);
      const s = left % 60;
      const pad = (n) => String(n).padStart(2, '0');
      return `${d}d ${pad(h)}:${pad(m)}:${pad(s)}`;
    };

    const renderCountdowns = () => {
      const el = document.getElementById('countdowns');
      el.innerHTML = countdowns.map((c) => {
        const done = c.is_completed || new Date(c.target_date) <= Date.now();
        return `<div class="item">
          <div class="row"><span class="title">${esc(c.title)}</span>
            <button class="ghost" data-delete-countdown="${c.id}">Delete</button></div>
          <div class="clock ${done ? 'done' : ''}">${done ? 'Done' : formatRemaining(c.target_date)}</div>
          <div class="meta">${esc(c.description)} ${c.is_timer ? '&middot; timer' : ''}
            &middot; ${new Date(c.target_date).toLocaleString()}</div>
        </div>`;
      }).join('') || '<div class="meta">No countdowns yet.</div>';
    };

    const tick = () => {
      renderCountdowns();
      countdowns
        .filter((c) => !c.is_completed && new Date(c.target_date) <= Date.now())
        .forEach((c) => {
          c.is_completed = true;
          api(`/countdowns/${c.id}/complete`, { method: 'POST' }).catch(() => {});
        });
    };

    const loadCountdowns = async () => {
      countdowns = await api('/countdowns');
      renderCountdowns();
    };

    const loadNotifications = async () => {
      const alerts = await api('/notifications');
      document.getElementById('alerts').innerHTML = alerts.map((a) =>
        `<div class="alert">${esc(a.title)}: ${a.phase === 'due' ? 'time is up' :
          `${a.days}d ${a.hours}h ${a.minutes}m left`}</div>`
      ).join('');
    };

    const renderCategories = () => {
      document.getElementById('categories').innerHTML = categories.map((c) =>
        `<div class="item"><div class="row"><span><span class="chip" style="background:${esc(c.color)}"></span>${esc(c.name)}</span>
          <button class="ghost" data-delete-category="${c.id}">Delete</button></div></div>`
      ).join('') || '<div class="meta">No categories yet.</div>';

      const options = categories.map((c) => `<option value="${c.id}">${esc(c.name)}</option>`).join('');
      const filter = document.getElementById('category-filter');
      const selected = filter.value;
      filter.innerHTML = `<option value="">All categories</option>${options}`;
      filter.value = selected;
      document.querySelector('#habit-form select[name="category_id"]').innerHTML =
        `<option value="">No category</option>${options}`;
    };

    const loadCategories = async () => {
      categories = await api('/categories');
      renderCategories();
    };

    const loadHabits = async () => {
      const filter = document.getElementById('category-filter').value;
      const query = filter ? `?category_id=${encodeURIComponent(filter)}` : '';
      const habits = await api(`/habits${query}`);
      const stats = await Promise.all(habits.map((h) => api(`/habits/${h.id}/stats`)));
      const byId = Object.fromEntries(categories.map((c) => [c.id, c]));

      document.getElementById('habits').innerHTML = habits.map((h, i) => {
        const s = stats[i];
        const cat = byId[h.category_id];
        const days = h.frequency === 'custom' && h.custom_days
          ? ` (${h.custom_days.map((d) => DAY_NAMES[d]).join(', ')})` : '';
        return `<div class="item">
          <div class="row"><span class="title">${cat ? `<span class="chip" style="background:${esc(cat.color)}"></span>` : ''}${esc(h.title)}</span>
            <span><button class="log" data-log-habit="${h.id}">Done today</button>
            <button class="ghost" data-delete-habit="${h.id}">Delete</button></span></div>
          <div class="meta">${esc(h.frequency)}${days} &middot; streak ${s.current_streak}
            &middot; best ${s.longest_streak} &middot; ${s.completion_rate.toFixed(0)}%
            &middot; ${s.total_completions} total</div>
        </div>`;
      }).join('') || '<div class="meta">No habits yet.</div>';
    };

    const loadOverview = async () => {
      const overview = await api('/stats');
      const max = Math.max(1, ...overview.last_7_days.map((d) => d.completions));
      document.getElementById('bars').innerHTML = overview.last_7_days.map((d) =>
        `<div title="${d.date}: ${d.completions}" style="height:${(d.completions / max) * 100}%"></div>`
      ).join('');
    };

    const refresh = async () => {
      await Promise.all([loadCountdowns(), loadCategories()]);
      await Promise.all([loadHabits(), loadOverview(), loadNotifications()]);
    };

    const formJson = (form) => Object.fromEntries(new FormData(form).entries());

    document.getElementById('day-picker').innerHTML = DAY_NAMES.map((name, i) =>
      `<label><input type="checkbox" value="${i}" /> ${name}</label>`
    ).join('');

    document.getElementById('countdown-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      const data = formJson(form);
      const body = {
        title: data.title,
        description: data.description || null,
        target_date: new Date(data.target_date).toISOString(),
        notify_before: data.notify_before ? Number(data.notify_before) : null,
        is_timer: form.is_timer.checked
      };
      api('/countdowns', { method: 'POST', body: JSON.stringify(body) })
        .then(() => { form.reset(); return refresh(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('habit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      const data = formJson(form);
      const picked = [...document.querySelectorAll('#day-picker input:checked')].map((i) => Number(i.value));
      const body = {
        title: data.title,
        description: data.description || null,
        frequency: data.frequency,
        custom_days: data.frequency === 'custom' ? picked : null,
        category_id: data.category_id || null
      };
      api('/habits', { method: 'POST', body: JSON.stringify(body) })
        .then(() => { form.reset(); return refresh(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('category-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      api('/categories', { method: 'POST', body: JSON.stringify(formJson(form)) })
        .then(() => { form.reset(); return refresh(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('category-filter').addEventListener('change', () => {
      loadHabits().catch((err) => setStatus(err.message, 'error'));
    });

    document.body.addEventListener('click', (event) => {
      const el = event.target;
      let request = null;
      if (el.dataset.logHabit) {
        request = api(`/habits/${el.dataset.logHabit}/log`, { method: 'POST' });
      } else if (el.dataset.deleteHabit) {
        request = api(`/habits/${el.dataset.deleteHabit}`, { method: 'DELETE' });
      } else if (el.dataset.deleteCountdown) {
        request = api(`/countdowns/${el.dataset.deleteCountdown}`, { method: 'DELETE' });
      } else if (el.dataset.deleteCategory) {
        request = api(`/categories/${el.dataset.deleteCategory}`, { method: 'DELETE' });
      }
      if (request) {
        request
          .then(() => { setStatus('Saved', 'ok'); return refresh(); })
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    setInterval(tick, 1000);
    setInterval(() => loadNotifications().catch(() => {}), 30000);
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
