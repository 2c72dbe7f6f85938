//! Tests for the ASAS-SN search-page scraper


/// Search page with a single periodic match (ASASSN-V J052159.11-333434.4)
pub const MATCH_PAGE: &str = r#"<html><body>
<div id="variables-stars-db-search"></div>
<div class="table-panel">
  <table class="table">
    <thead>
      <tr><th>Name</th><th>RAJ2000</th><th>DEJ2000</th><th>Other Names</th><th>Distance</th><th>Mean VMag</th><th>Amplitude</th><th>Period</th><th>Type</th><th>Class Probability</th></tr>
    </thead>
    <tbody>
      <tr>
        <td><a href="/variables/8b5a5d92-92cc-5de7-8a34-6dae8a257c13">ASASSN-V J052800.10-335850.2</a></td>
        <td>82.00042</td>
        <td>-33.98061</td>
        <td></td>
        <td>5.2</td>
        <td>13.69</td>
        <td>0.76</td>
        <td>0.766706</td>
        <td>EW</td>
        <td>0.99</td>
      </tr>
    </tbody>
  </table>
</div>
</body></html>"#;

/// Search page whose nearest match is flagged non-periodic
pub const NON_PERIODIC_PAGE: &str = r#"<html><body>
<div class="table-panel">
  <table class="table">
    <tbody>
      <tr>
        <td><a href="/variables/41227859-9769-5399-9339-d60a1e4b7f5a">ASASSN-V J191742.26+691358.0</a></td>
        <td>289.42608</td>
        <td>69.23278</td>
        <td></td>
        <td>11.1</td>
        <td>14.93</td>
        <td>0.44</td>
        <td>NON PERIODIC</td>
        <td>YSO</td>
        <td>0.9</td>
      </tr>
    </tbody>
  </table>
</div>
</body></html>"#;

/// Search page for a coordinate with no variable within the radius
pub const EMPTY_PAGE: &str = r#"<html><body>
<div class="table-panel">
  <p>No results found.</p>
</div>
</body></html>"#;
