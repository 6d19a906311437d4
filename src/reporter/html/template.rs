/// Liquid template of the HTML report. Every interpolated value is escaped
/// before it reaches the template.
pub const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      padding: 20px;
    }
    .container {
      max-width: 1200px;
      margin: 0 auto;
      background: white;
      border-radius: 10px;
      box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
      overflow: hidden;
    }
    .header {
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 40px;
      text-align: center;
    }
    .header h1 { font-size: 2.5em; margin-bottom: 10px; font-weight: 600; }
    .header p { font-size: 1.1em; opacity: 0.9; }
    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 20px;
      padding: 40px;
      background: #f8f9fa;
    }
    .stat-card {
      background: white;
      padding: 20px;
      border-radius: 8px;
      border-left: 4px solid #667eea;
      box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
    }
    .stat-card h3 { color: #666; font-size: 0.9em; margin-bottom: 8px; text-transform: uppercase; }
    .stat-card .value { font-size: 2.5em; font-weight: bold; color: #333; }
    .stat-card.pass { border-left-color: #10b981; }
    .stat-card.pass .value { color: #10b981; }
    .stat-card.fail { border-left-color: #ef4444; }
    .stat-card.fail .value { color: #ef4444; }
    .stat-card.skip { border-left-color: #f59e0b; }
    .stat-card.skip .value { color: #f59e0b; }
    .progress-bar {
      width: 100%;
      height: 8px;
      background: #e5e7eb;
      border-radius: 4px;
      overflow: hidden;
      margin-top: 10px;
    }
    .progress-fill {
      height: 100%;
      background: linear-gradient(90deg, #10b981 0%, #6366f1 100%);
      border-radius: 4px;
    }
    .content { padding: 40px; }
    .content h2 { color: #333; margin-bottom: 20px; font-size: 1.5em; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; }
    thead { background: #f3f4f6; border-bottom: 2px solid #e5e7eb; }
    th { padding: 15px; text-align: left; color: #374151; font-weight: 600; font-size: 0.9em; text-transform: uppercase; }
    td { padding: 15px; border-bottom: 1px solid #e5e7eb; }
    tr:hover { background: #f9fafb; }
    tr.error-row { background: #fef2f2; }
    tr.error-row pre {
      background: #fee;
      padding: 10px;
      border-radius: 4px;
      overflow-x: auto;
      color: #c41e3a;
      font-size: 0.85em;
    }
    .status-badge {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      width: 24px;
      height: 24px;
      border-radius: 50%;
      color: white;
      font-weight: bold;
      margin-right: 8px;
    }
    .status-badge.pass { background: #10b981; }
    .status-badge.fail { background: #ef4444; }
    .status-badge.skip { background: #f59e0b; }
    .status-badge.error { background: #7c3aed; }
    .status { display: inline-block; padding: 4px 12px; border-radius: 20px; font-size: 0.85em; font-weight: 600; }
    .status.pass { background: #d1fae5; color: #065f46; }
    .status.fail { background: #fee2e2; color: #991b1b; }
    .status.skip { background: #fef3c7; color: #92400e; }
    .status.error { background: #ede9fe; color: #5b21b6; }
    a.attachment { margin-left: 8px; font-size: 0.8em; color: #6366f1; }
    .footer {
      background: #f8f9fa;
      padding: 20px;
      text-align: center;
      color: #666;
      border-top: 1px solid #e5e7eb;
      font-size: 0.9em;
    }
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{{ title }}</h1>
      <p>{{ subtitle }}</p>
    </div>

    <div class="stats-grid">
      <div class="stat-card">
        <h3>Total Tests</h3>
        <div class="value">{{ total }}</div>
      </div>
      <div class="stat-card pass">
        <h3>Passed</h3>
        <div class="value">{{ passed }}</div>
      </div>
      <div class="stat-card fail">
        <h3>Failed</h3>
        <div class="value">{{ failed }}</div>
      </div>
      <div class="stat-card skip">
        <h3>Skipped</h3>
        <div class="value">{{ skipped }}</div>
      </div>
      <div class="stat-card">
        <h3>Pass Rate</h3>
        <div class="value">{{ pass_rate }}%</div>
        <div class="progress-bar">
          <div class="progress-fill" style="width: {{ pass_rate }}%"></div>
        </div>
      </div>
      <div class="stat-card">
        <h3>Duration</h3>
        <div class="value">{{ duration }}s</div>
      </div>
    </div>

    <div class="content">
      <h2>Test Execution Details</h2>
      <table>
        <thead>
          <tr>
            <th>Test Name</th>
            <th>Suite</th>
            <th>Status</th>
            <th>Duration</th>
          </tr>
        </thead>
        <tbody>
{% for row in rows %}
          <tr class="{{ row.class }}">
            <td><span class="status-badge {{ row.class }}">{{ row.icon }}</span> {{ row.name }}{% for attachment in row.attachments %}<a class="attachment" href="{{ attachment.path }}">{{ attachment.name }}</a>{% endfor %}</td>
            <td>{{ row.suite }}</td>
            <td><span class="status {{ row.class }}">{{ row.status }}</span></td>
            <td>{{ row.duration }}ms</td>
          </tr>
{% if row.error %}
          <tr class="error-row"><td colspan="4"><pre>{{ row.error }}</pre></td></tr>
{% endif %}
{% endfor %}
        </tbody>
      </table>
    </div>

    <div class="footer">
      <p>Generated on {{ generated_at }}</p>
      <p>{{ title }}</p>
    </div>
  </div>
</body>
</html>
"#;
