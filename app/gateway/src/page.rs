//! Embedded single-page dashboard.
//!
//! The page is compiled into the binary. Panel text comes from
//! `/api/dashboard`, chat runs over `/ws`; all text is inserted with
//! `textContent`, never as markup.

/// The complete dashboard HTML.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Pulsage Mission Control</title>
<style>
:root {
  --bg: #020617;
  --panel: rgba(15, 23, 42, 0.6);
  --border: rgba(148, 163, 184, 0.2);
  --text: #e2e8f0;
  --muted: #94a3b8;
  --accent: #38bdf8;
  --warn: #f87171;
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { height: 100%; }
body {
  background: radial-gradient(ellipse at top, #020617 0%, #000000 100%);
  color: var(--text);
  font-family: var(--font);
  display: flex;
}

/* Sidebar chat */
aside {
  width: 360px;
  flex-shrink: 0;
  display: flex;
  flex-direction: column;
  background: rgba(2, 6, 23, 0.85);
  border-right: 1px solid var(--border);
}
aside h2 { padding: 16px; font-size: 18px; border-bottom: 1px solid var(--border); }
#warning {
  display: none;
  margin: 12px 16px 0;
  padding: 10px 12px;
  border-radius: 8px;
  background: rgba(248, 113, 113, 0.12);
  border: 1px solid var(--warn);
  color: var(--warn);
  font-size: 13px;
}
#messages {
  flex: 1;
  overflow-y: auto;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 10px;
}
.bubble {
  padding: 10px 14px;
  border-radius: 12px;
  font-size: 14px;
  line-height: 1.5;
  white-space: pre-wrap;
  word-wrap: break-word;
}
.bubble .who { display: block; font-size: 11px; color: var(--muted); margin-bottom: 4px; }
.bubble.user { background: rgba(56, 189, 248, 0.15); align-self: flex-end; }
.bubble.assistant { background: var(--panel); border: 1px solid var(--border); }
.bubble.pending { color: var(--muted); font-style: italic; }
form { display: flex; gap: 8px; padding: 12px 16px; border-top: 1px solid var(--border); }
form input {
  flex: 1;
  padding: 10px 12px;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--panel);
  color: var(--text);
}
form button {
  padding: 10px 14px;
  border-radius: 8px;
  border: none;
  background: var(--accent);
  color: #020617;
  font-weight: 600;
  cursor: pointer;
}
form input:disabled, form button:disabled { opacity: 0.5; cursor: wait; }

/* Main dashboard */
main { flex: 1; overflow-y: auto; padding: 32px 40px; }
.pulse-title { text-align: center; color: var(--accent); font-size: 3rem; font-weight: 700; }
.pulse-subtitle { text-align: center; color: var(--muted); margin-top: 0.25rem; margin-bottom: 2rem; }
hr { border: none; border-top: 1px solid var(--border); margin: 24px 0; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.status-box { background: var(--panel); border: 1px solid var(--border); padding: 1rem; border-radius: 0.75rem; }
.status-box h3 { margin-bottom: 0.5rem; }
.status-box ul { padding-left: 1.25rem; }
.info {
  padding: 12px 16px;
  border-radius: 8px;
  background: rgba(56, 189, 248, 0.1);
  border: 1px solid rgba(56, 189, 248, 0.3);
}
</style>
</head>
<body>
<aside>
  <h2>🛰 AI Copilot</h2>
  <div id="warning"></div>
  <div id="messages"></div>
  <form id="chat">
    <input id="input" autocomplete="off" placeholder="Transmit message...">
    <button type="submit">Send</button>
  </form>
</aside>
<main>
  <div class="pulse-title" id="title"></div>
  <div class="pulse-subtitle" id="subtitle"></div>
  <hr>
  <div class="columns">
    <div class="status-box"><h3>🌌 System Status</h3><ul id="status"></ul></div>
    <div class="status-box"><h3>🧭 Mission Notes</h3><p id="notes"></p></div>
  </div>
  <hr>
  <div class="info" id="telemetry"></div>
</main>
<script>
(function () {
  const $ = (id) => document.getElementById(id);
  const messages = $('messages');
  const input = $('input');
  const button = document.querySelector('#chat button');
  let pending = null;

  fetch('/api/dashboard')
    .then((r) => r.json())
    .then((d) => {
      document.title = d.title;
      $('title').textContent = d.title;
      $('subtitle').textContent = d.subtitle;
      $('notes').textContent = d.notes;
      $('telemetry').textContent = d.telemetry;
      const status = $('status');
      status.replaceChildren();
      d.status.forEach((line) => {
        const li = document.createElement('li');
        li.textContent = line;
        status.appendChild(li);
      });
    })
    .catch(() => { $('notes').textContent = 'Dashboard data unavailable.'; });

  function bubble(role, text, extra) {
    const el = document.createElement('div');
    el.className = 'bubble ' + role + (extra ? ' ' + extra : '');
    const who = document.createElement('span');
    who.className = 'who';
    who.textContent = role;
    el.appendChild(who);
    el.appendChild(document.createTextNode(text));
    messages.appendChild(el);
    messages.scrollTop = messages.scrollHeight;
    return el;
  }

  function busy(on) {
    input.disabled = on;
    button.disabled = on;
    if (!on) input.focus();
  }

  function warn(text) {
    const el = $('warning');
    el.textContent = text;
    el.style.display = 'block';
  }

  const proto = location.protocol === 'https:' ? 'wss:' : 'ws:';
  const ws = new WebSocket(proto + '//' + location.host + '/ws');
  busy(true);

  ws.onopen = () => busy(false);
  ws.onclose = () => {
    busy(true);
    warn('Signal lost. Reload to start a new session.');
  };
  ws.onmessage = (event) => {
    const msg = JSON.parse(event.data);
    switch (msg.type) {
      case 'warning':
        warn(msg.message);
        break;
      case 'pending':
        pending = bubble('assistant', 'Receiving signal...', 'pending');
        break;
      case 'reply':
        if (pending) { pending.remove(); pending = null; }
        bubble('assistant', msg.content);
        busy(false);
        break;
      case 'transcript':
        messages.replaceChildren();
        msg.turns.forEach((t) => bubble(t.role, t.content));
        break;
      case 'error':
        if (pending) { pending.remove(); pending = null; }
        warn(msg.message);
        busy(false);
        break;
    }
  };

  $('chat').addEventListener('submit', (event) => {
    event.preventDefault();
    const text = input.value;
    if (!text.trim() || ws.readyState !== WebSocket.OPEN) return;
    input.value = '';
    bubble('user', text);
    busy(true);
    ws.send(JSON.stringify({ type: 'send', content: text }));
  });

  setInterval(() => {
    if (ws.readyState === WebSocket.OPEN) ws.send(JSON.stringify({ type: 'ping' }));
  }, 30000);
})();
</script>
</body>
</html>
"##;
