//! Tests for TESS EB portal listing extraction and matching


/// Listing page excerpt with zero-padded TIC numbers in the second column
pub const LISTING_PAGE: &str = r#"<html><body>
<table class="listing">
  <thead>
    <tr><th>#</th><th>TIC</th><th>Signal</th><th>Sectors</th><th>Morphology</th></tr>
  </thead>
  <tbody>
    <tr><td>1</td><td>0000737546</td><td>1</td><td>17</td><td>0.93</td></tr>
    <tr><td>2</td><td>0000878056</td><td>1</td><td>17,18</td><td>0.88</td></tr>
    <tr><td>3</td><td>0154222671</td><td>1</td><td>19</td><td>0.61</td></tr>
    <tr><td>4</td><td>1717079071</td><td>1</td><td>14</td><td>0.74</td></tr>
  </tbody>
</table>
</body></html>"#;
