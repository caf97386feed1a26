use{
    std::{
        fs::File,
        io::{Write, BufWriter}
    },
    serde_json::Value,
    crate::stats_methods::*,
};

pub type CurveWriter = BufWriter<File>;

/// Writes the daily/cumulative case curves of a run (or the
/// sample-averaged curves) as whitespace separated columns, with the
/// parameter json embedded as `#` comment lines for provenance.
pub struct CaseWriter
{
    writer: CurveWriter,
    pub path: String,
}

impl CaseWriter
{
    pub fn new(name: &str) -> std::io::Result<Self>
    {
        let writer = BufWriter::new(File::create(name)?);
        Ok(
            Self{
                writer,
                path: name.to_owned(),
            }
        )
    }

    pub fn write_header(&mut self, jsons: &[Value]) -> std::io::Result<()>
    {
        write_jsons(jsons, &mut self.writer)?;
        writeln!(self.writer, "#day daily_mean daily_var cumulative_mean cumulative_var")
    }

    pub fn write_day(
        &mut self,
        day: usize,
        daily: &MyVariance,
        cumulative: &MyVariance
    ) -> std::io::Result<()>
    {
        writeln!(
            self.writer,
            "{} {} {} {} {}",
            day,
            daily.mean(),
            daily.variance_of_mean(),
            cumulative.mean(),
            cumulative.variance_of_mean()
        )
    }
}

pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> std::io::Result<()>
{
    for j in jsons{
        write!(writer, "#")?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer)?;
    }
    Ok(())
}
