//! Embedded dashboard page
//!
//! Single self-contained page; the graph widget (Cytoscape.js) comes from a
//! CDN and owns all layout computation. The page only fetches the element
//! sequence, forwards layout selections, and shows the detail text for
//! tapped vertices.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Kubernetes Cluster Visualization</title>
<script src="https://unpkg.com/cytoscape@3/dist/cytoscape.min.js"></script>
<style>
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0;padding:16px}
h1{text-align:center}
#meta{text-align:center;color:#666;font-size:13px;margin-bottom:10px}
#controls{margin-bottom:10px}
#controls label{margin-right:6px}
#layout-select{width:200px}
#graph{width:100%;height:600px;border:1px solid #ddd}
#node-detail{margin-top:20px;text-align:center;white-space:pre-line}
</style>
</head>
<body>
<h1 id="title">Kubernetes Cluster Visualization</h1>
<div id="meta"></div>
<div id="controls">
  <label for="layout-select">Select Layout:</label>
  <select id="layout-select">
    <option value="grid">Grid</option>
    <option value="circle">Circle</option>
    <option value="breadthfirst">Breadthfirst</option>
    <option value="random">Random</option>
  </select>
</div>
<div id="graph"></div>
<div id="node-detail">Click on a node to see details</div>
<script>
async function fetchJson(url) {
  const res = await fetch(url);
  if (!res.ok) throw new Error(url + ': ' + res.status);
  return res.json();
}

async function main() {
  const snap = await fetchJson('/api/snapshot');
  document.title = snap.title;
  document.getElementById('title').textContent = snap.title;
  document.getElementById('meta').textContent =
    snap.nodes + ' nodes · ' + snap.pods + ' pods · ' + snap.services +
    ' services · snapshot taken ' + new Date(snap.taken_at).toLocaleString();

  const select = document.getElementById('layout-select');
  select.value = snap.default_layout;

  const elements = await fetchJson('/api/elements');
  const cy = cytoscape({
    container: document.getElementById('graph'),
    elements: elements,
    layout: { name: snap.default_layout },
    style: [
      { selector: '.node', style: { 'background-color': 'blue', label: 'data(label)' } },
      { selector: '.pod', style: { 'background-color': 'green', label: 'data(label)' } },
      { selector: '.service', style: { 'background-color': 'red', label: 'data(label)' } },
      { selector: 'edge', style: { 'line-color': 'gray' } }
    ]
  });

  select.addEventListener('change', async () => {
    const res = await fetch('/api/layout/' + encodeURIComponent(select.value));
    if (!res.ok) return;
    cy.layout(await res.json()).run();
  });

  const detail = document.getElementById('node-detail');
  cy.on('tap', 'node', async evt => {
    const data = evt.target.data();
    const res = await fetch(
      '/api/detail?id=' + encodeURIComponent(data.id) +
      '&kind=' + encodeURIComponent(data.type));
    if (!res.ok) return;
    detail.textContent = await res.text();
  });
}

main().catch(err => {
  document.getElementById('node-detail').textContent = 'Failed to load dashboard: ' + err;
});
</script>
</body>
</html>
"##;
