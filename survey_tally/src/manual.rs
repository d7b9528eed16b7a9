/*!

This is the long-form manual for `survey_tally` and `evalsurvey`.

## Input

A survey is a table: the first row holds the questions, every following row
holds the answers of one respondent. The following formats are read by
`evalsurvey`:
* `xlsx` Excel workbook (the worksheet is given with `--excel-worksheet-name`
  when the workbook has more than one)
* `csv` Comma Separated Values with a header row
* `json` the export of a spreadsheet endpoint: a list of records, an object
  with a `records` or `data` list, or an object with `columns` and `rows`

Blank cells are treated as unanswered. A column without a header is named
`Unnamed: N` (N being its position) and is never a question. A header that
repeats an earlier one gets a suffix: `Atención`, `Atención.1`, `Atención.2`.

## Questions

Only two scales are recognized:
* the 5-point satisfaction scale: `Muy satisfecho`, `Satisfecho`, `Neutral`,
  `Insatisfecho`, `Muy insatisfecho`
* Yes/No: `Sí` (also written `Si`), `No`

The answers are compared without regard to case or surrounding spaces.
A column is a question when:
* its name does not contain one of the excluded keywords (timestamps, names,
  comments...)
* it has at most 10 distinct answers
* all its answers belong to one of the scales

A column that was never answered is counted as a satisfaction question.

Satisfaction questions are always reported before Yes/No questions.

## Groups

Respondents are grouped by `Nivel Educativo – Campus`. If one of these two
columns is missing, all the respondents form a single group called `Plantel`.
Groups are numbered in alphabetical order, starting at 0.
Respondents with a blank level or campus belong to no group: they count in the
results of the whole survey but in none of the per-group results.

## Comparison

For each group, all the answers to all the satisfaction questions are pooled.
The share of `Insatisfecho` and `Muy insatisfecho` answers is the negative
percentage. Groups are ranked by negative percentage (highest first), then by
number of respondents (largest first), then by name. The first three groups
that have at least one answer are flagged as "foco rojo".

## Configuration file

All the fields are optional:

```json
{
  "source": { "provider": "xlsx", "filePath": "dataset.xlsx", "excelWorksheetName": "Respuestas" },
  "levelColumn": "Nivel Educativo",
  "siteColumn": "Campus",
  "excludedKeywords": ["marca temporal", "comentarios"],
  "maxDistinctValues": 10,
  "focusCount": 3,
  "fallbackGroup": "Plantel",
  "outputPath": "data.json"
}
```

*/
